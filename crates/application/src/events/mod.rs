//! Lookup event system
//!
//! Diagnostic side channel for the resolution engine. Every per-type query
//! produces one `LookupEvent`, sent through a `LookupEventEmitter` that never
//! blocks and never fails. Consumers (logging, metrics) live outside the
//! engine and drain the receiving end.
//!
//! ```rust,no_run
//! use dnsdig_application::events::LookupEventEmitter;
//!
//! let (emitter, mut rx) = LookupEventEmitter::new_enabled();
//! tokio::spawn(async move {
//!     while let Some(event) = rx.recv().await {
//!         println!("{} {} -> {}", event.domain, event.query_type, event.status);
//!     }
//! });
//! ```

pub mod emitter;
pub mod types;

pub use emitter::LookupEventEmitter;
pub use types::{LookupEvent, LookupStatus};
