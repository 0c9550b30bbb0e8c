//! dnsdig Infrastructure Layer
//!
//! Adapters for the application ports: DNS-over-HTTPS query clients, the
//! public-suffix domain validator, and lookup event consumers.
pub mod dns;
pub mod validation;

pub use dns::{create_query_client, LookupMetrics};
pub use validation::PslDomainValidator;
