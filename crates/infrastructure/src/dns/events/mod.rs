//! Lookup event consumers
//!
//! The application layer emits a `LookupEvent` per query; this module
//! drains the channel and aggregates the events into `LookupMetrics`.
pub mod consumer;
pub mod metrics;

pub use consumer::spawn_event_consumer;
pub use metrics::{LookupMetrics, LookupMetricsSnapshot};
