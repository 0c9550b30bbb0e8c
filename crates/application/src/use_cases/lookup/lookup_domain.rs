use super::ResolveRecordsUseCase;
use crate::ports::DomainValidator;
use dnsdig_domain::{DomainError, ResolutionResult, TypeSelector};
use std::sync::Arc;
use tracing::{info, instrument};

/// Request entry point: validate the raw domain, parse the type selector,
/// then hand over to the resolution engine.
pub struct LookupDomainUseCase {
    validator: Arc<dyn DomainValidator>,
    resolver: Arc<ResolveRecordsUseCase>,
}

impl LookupDomainUseCase {
    pub fn new(validator: Arc<dyn DomainValidator>, resolver: Arc<ResolveRecordsUseCase>) -> Self {
        Self {
            validator,
            resolver,
        }
    }

    /// A rejected domain short-circuits before any DNS query is sent.
    #[instrument(skip_all, fields(domain = raw_domain, record_type = raw_type))]
    pub async fn execute(
        &self,
        raw_domain: Option<&str>,
        raw_type: Option<&str>,
    ) -> Result<ResolutionResult, DomainError> {
        let domain = self.validator.validate(raw_domain.unwrap_or("")).map_err(|rejection| {
            info!(reason = %rejection, "Domain rejected");
            DomainError::from(rejection)
        })?;

        let selector = TypeSelector::parse(raw_type);

        self.resolver.execute(&domain, &selector).await
    }
}
