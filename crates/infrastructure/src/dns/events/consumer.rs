use super::LookupMetrics;
use dnsdig_application::events::LookupEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Drain lookup events into `metrics` until every emitter is dropped.
pub fn spawn_event_consumer(
    mut receiver: mpsc::UnboundedReceiver<LookupEvent>,
    metrics: LookupMetrics,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Lookup event consumer started");

        while let Some(event) = receiver.recv().await {
            debug!(
                domain = %event.domain,
                record_type = %event.query_type,
                status = %event.status,
                response_time_ms = event.response_time_ms(),
                "Lookup completed"
            );
            metrics.track(&event);
        }

        info!(
            total_lookups = metrics.total_lookups(),
            "Lookup event consumer stopped"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdig_application::events::{LookupEventEmitter, LookupStatus};
    use dnsdig_domain::{Domain, QueryType, RecordType};

    #[tokio::test]
    async fn test_consumer_tracks_until_emitters_drop() {
        let (emitter, receiver) = LookupEventEmitter::new_enabled();
        let metrics = LookupMetrics::new();
        let handle = spawn_event_consumer(receiver, metrics.clone());

        for rt in RecordType::all() {
            emitter.emit(LookupEvent::new(
                Domain::from_normalized("example.com"),
                QueryType::Known(*rt),
                LookupStatus::Answered { records: 1 },
                500,
            ));
        }
        drop(emitter);
        handle.await.unwrap();

        assert_eq!(metrics.total_lookups(), 7);
        assert_eq!(metrics.type_count("CAA"), 1);
    }
}
