use dnsdig_application::use_cases::LookupDomainUseCase;
use dnsdig_infrastructure::LookupMetrics;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupDomainUseCase>,
    pub metrics: LookupMetrics,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(lookup: Arc<LookupDomainUseCase>, metrics: LookupMetrics) -> Self {
        Self {
            lookup,
            metrics,
            started_at: Instant::now(),
        }
    }
}
