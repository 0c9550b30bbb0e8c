use super::{request_error, status_error, DNS_JSON_CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE};
use crate::dns::rcode;
use bytes::Bytes;
use dnsdig_domain::QueryError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::RequestBuilder;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with connection pooling. HTTP/2 is negotiated via ALPN.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(8)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// DNS-over-HTTPS transport for one upstream endpoint.
///
/// The deadline covers the whole exchange, from connect to the last body
/// byte; running out of it is reported as `ETIMEOUT`.
#[derive(Debug, Clone)]
pub struct HttpsTransport {
    url: String,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST a wire-format message (RFC 8484 §4.1) and return the raw reply.
    pub async fn send_message(&self, message_bytes: &[u8]) -> Result<Bytes, QueryError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            "Sending DoH wire query"
        );

        let request = SHARED_CLIENT
            .post(&self.url)
            .header(CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE)
            .header(ACCEPT, DNS_MESSAGE_CONTENT_TYPE)
            .body(message_bytes.to_vec());

        self.exchange(request).await
    }

    /// GET `?name=&type=` against the JSON API and return the raw body.
    pub async fn get_json(&self, name: &str, record_type: &str) -> Result<Bytes, QueryError> {
        debug!(
            url = %self.url,
            name = name,
            record_type = record_type,
            "Sending DoH JSON query"
        );

        let request = SHARED_CLIENT
            .get(&self.url)
            .query(&[("name", name), ("type", record_type)])
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE);

        self.exchange(request).await
    }

    async fn exchange(&self, request: RequestBuilder) -> Result<Bytes, QueryError> {
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| request_error(&self.url, &e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(status_error(&self.url, status));
            }

            response
                .bytes()
                .await
                .map_err(|e| request_error(&self.url, &e))
        };

        let body = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                debug!(url = %self.url, timeout_ms = self.timeout.as_millis() as u64, "DoH query timed out");
                QueryError::resolver(rcode::TIMEOUT)
            })??;

        debug!(
            url = %self.url,
            response_len = body.len(),
            "DoH response received"
        );

        Ok(body)
    }
}
