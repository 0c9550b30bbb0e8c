use crate::events::{LookupEvent, LookupEventEmitter, LookupStatus};
use crate::ports::DnsQueryClient;
use crate::services::ErrorClassifier;
use dnsdig_domain::{
    Domain, DomainError, QueryError, QueryOutcome, QueryType, ResolutionResult, TypeSelector,
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, instrument, warn, Instrument};

/// Resolution engine: one query per requested type, every resolver failure
/// folded into a per-type outcome.
pub struct ResolveRecordsUseCase {
    client: Arc<dyn DnsQueryClient>,
    emitter: LookupEventEmitter,
}

impl ResolveRecordsUseCase {
    pub fn new(client: Arc<dyn DnsQueryClient>) -> Self {
        Self {
            client,
            emitter: LookupEventEmitter::new_disabled(),
        }
    }

    pub fn with_emitter(mut self, emitter: LookupEventEmitter) -> Self {
        self.emitter = emitter;
        self
    }

    /// Resolve `domain` for the selected type(s).
    ///
    /// Only request-level failures are returned as `Err`: a transport that
    /// cannot be reached (`UpstreamUnavailable`) or a query task that died
    /// (`Internal`).
    #[instrument(skip_all, fields(domain = %domain, selector = %selector, transport = self.client.transport_name()))]
    pub async fn execute(
        &self,
        domain: &Domain,
        selector: &TypeSelector,
    ) -> Result<ResolutionResult, DomainError> {
        match selector {
            TypeSelector::Single(query_type) => {
                let outcome = query_one(self.client.as_ref(), &self.emitter, domain, query_type)
                    .await
                    .map_err(upstream_unavailable)?;
                Ok(ResolutionResult::new(vec![outcome]))
            }
            TypeSelector::All => self.resolve_all(domain, selector.expand()).await,
        }
    }

    /// Fan out one task per type and wait for every one of them to settle.
    ///
    /// Outcomes are collected positionally from the spawn order, so the
    /// result follows the canonical type order whatever order the resolver
    /// answers in.
    async fn resolve_all(
        &self,
        domain: &Domain,
        query_types: Vec<QueryType>,
    ) -> Result<ResolutionResult, DomainError> {
        debug!(types = query_types.len(), "Dispatching concurrent lookups");

        let handles: Vec<_> = query_types
            .iter()
            .cloned()
            .map(|query_type| {
                let client = Arc::clone(&self.client);
                let emitter = self.emitter.clone();
                let domain = domain.clone();
                tokio::spawn(
                    async move { query_one(client.as_ref(), &emitter, &domain, &query_type).await }
                        .in_current_span(),
                )
            })
            .collect();

        let settled = join_all(handles).await;

        let mut outcomes = Vec::with_capacity(settled.len());
        let mut transport_failure: Option<QueryError> = None;
        let mut task_failure: Option<String> = None;

        for (query_type, joined) in query_types.iter().zip(settled) {
            match joined {
                Ok(Ok(outcome)) => outcomes.push(outcome),
                Ok(Err(e)) => {
                    warn!(record_type = %query_type, error = %e, "Resolver transport failed");
                    transport_failure.get_or_insert(e);
                }
                Err(e) => {
                    error!(record_type = %query_type, error = %e, "Lookup task did not complete");
                    task_failure.get_or_insert_with(|| e.to_string());
                }
            }
        }

        if let Some(message) = task_failure {
            return Err(DomainError::Internal(message));
        }
        if let Some(e) = transport_failure {
            return Err(upstream_unavailable(e));
        }

        debug!(
            outcomes = outcomes.len(),
            failures = outcomes.iter().filter(|o| !o.is_success()).count(),
            "All lookups settled"
        );

        Ok(ResolutionResult::new(outcomes))
    }
}

/// Run one query and normalize it. Only a transport failure escapes as `Err`.
async fn query_one(
    client: &dyn DnsQueryClient,
    emitter: &LookupEventEmitter,
    domain: &Domain,
    query_type: &QueryType,
) -> Result<QueryOutcome, QueryError> {
    let start = Instant::now();
    let result = client.query(domain, query_type).await;
    let response_time_us = start.elapsed().as_micros() as u64;

    let (status, outcome) = match result {
        Ok(records) => {
            debug!(record_type = %query_type, records = records.len(), "Lookup answered");
            (
                LookupStatus::Answered {
                    records: records.len(),
                },
                Ok(QueryOutcome::success(query_type.clone(), records)),
            )
        }
        Err(e @ QueryError::Transport { .. }) => (LookupStatus::Unreachable, Err(e)),
        Err(e) => {
            let message = ErrorClassifier::classify_error(&e);
            debug!(record_type = %query_type, code = ?e.code(), message = %message, "Lookup failed");
            (
                LookupStatus::Failed {
                    code: e.code().map(str::to_string),
                },
                Ok(QueryOutcome::failure(query_type.clone(), message)),
            )
        }
    };

    emitter.emit(LookupEvent::new(
        domain.clone(),
        query_type.clone(),
        status,
        response_time_us,
    ));

    outcome
}

fn upstream_unavailable(error: QueryError) -> DomainError {
    match error {
        QueryError::Transport { message } => DomainError::UpstreamUnavailable(message),
        other => DomainError::UpstreamUnavailable(other.to_string()),
    }
}
