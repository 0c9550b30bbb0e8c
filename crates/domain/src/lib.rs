//! dnsdig Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod outcome;

pub use config::{CliOverrides, Config, ConfigError, UpstreamFormat};
pub use dns_record::{QueryType, RawAnswer, RecordType, TypeSelector};
pub use domain_name::{Domain, DomainRejection};
pub use errors::{DomainError, QueryError};
pub use outcome::{QueryOutcome, ResolutionResult};
