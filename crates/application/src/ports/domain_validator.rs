use dnsdig_domain::{Domain, DomainRejection};

/// Turns raw user input into a lookup target, or says why it cannot be one.
pub trait DomainValidator: Send + Sync {
    fn validate(&self, raw: &str) -> Result<Domain, DomainRejection>;
}
