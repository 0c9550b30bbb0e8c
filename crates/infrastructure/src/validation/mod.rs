pub mod psl_validator;

pub use psl_validator::PslDomainValidator;
