//! DNS-over-HTTPS query clients.
//!
//! Both clients implement [`DnsQueryClient`] with the same failure
//! contract: a non-zero RCODE, a timeout or an HTTP 400 is a coded resolver
//! failure; anything that makes the upstream unusable is a transport failure.

pub mod json;
#[cfg(feature = "dns-over-https-wire")]
pub mod wire;

pub use json::JsonDohClient;
#[cfg(feature = "dns-over-https-wire")]
pub use wire::WireDohClient;

use super::transport::HttpsTransport;
use dnsdig_application::ports::DnsQueryClient;
use dnsdig_domain::config::UpstreamConfig;
use dnsdig_domain::{ConfigError, UpstreamFormat};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the query client for the configured upstream.
pub fn create_query_client(
    config: &UpstreamConfig,
) -> Result<Arc<dyn DnsQueryClient>, ConfigError> {
    let transport = HttpsTransport::new(
        config.url.clone(),
        Duration::from_millis(config.timeout_ms),
    );

    info!(
        url = %config.url,
        format = %config.format,
        timeout_ms = config.timeout_ms,
        "Upstream DoH resolver configured"
    );

    match config.format {
        UpstreamFormat::Json => Ok(Arc::new(JsonDohClient::new(
            transport,
            config.empty_answer_as_nodata,
        ))),
        #[cfg(feature = "dns-over-https-wire")]
        UpstreamFormat::Wire => Ok(Arc::new(WireDohClient::new(
            transport,
            config.empty_answer_as_nodata,
        ))),
        #[cfg(not(feature = "dns-over-https-wire"))]
        UpstreamFormat::Wire => Err(ConfigError::Invalid(
            "upstream.format = \"wire\" requires the dns-over-https-wire feature".to_string(),
        )),
    }
}
