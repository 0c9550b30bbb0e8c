pub mod clients;
pub mod events;
#[cfg(feature = "dns-over-https-wire")]
pub mod forwarding;
pub mod rcode;
pub mod transport;

pub use clients::{create_query_client, JsonDohClient};
#[cfg(feature = "dns-over-https-wire")]
pub use clients::WireDohClient;
pub use events::{spawn_event_consumer, LookupMetrics, LookupMetricsSnapshot};
