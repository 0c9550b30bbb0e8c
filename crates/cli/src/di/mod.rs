use dnsdig_api::AppState;
use dnsdig_application::events::LookupEventEmitter;
use dnsdig_application::use_cases::{LookupDomainUseCase, ResolveRecordsUseCase};
use dnsdig_domain::Config;
use dnsdig_infrastructure::dns::spawn_event_consumer;
use dnsdig_infrastructure::{create_query_client, LookupMetrics, PslDomainValidator};
use std::sync::Arc;
use tracing::info;

/// Wired application graph
pub struct Services {
    pub lookup: Arc<LookupDomainUseCase>,
    pub metrics: LookupMetrics,
}

impl Services {
    /// Must be called inside the tokio runtime: it starts the event consumer.
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let client = create_query_client(&config.upstream)?;

        let metrics = LookupMetrics::new();
        let (emitter, receiver) = LookupEventEmitter::new_enabled();
        spawn_event_consumer(receiver, metrics.clone());

        let resolver = Arc::new(ResolveRecordsUseCase::new(client).with_emitter(emitter));
        let lookup = Arc::new(LookupDomainUseCase::new(
            Arc::new(PslDomainValidator::new()),
            resolver,
        ));

        info!("Services initialized");

        Ok(Self { lookup, metrics })
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.lookup), self.metrics.clone())
    }
}
