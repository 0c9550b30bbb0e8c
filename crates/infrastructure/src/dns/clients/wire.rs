use crate::dns::forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
use crate::dns::rcode;
use crate::dns::transport::HttpsTransport;
use async_trait::async_trait;
use dnsdig_application::ports::DnsQueryClient;
use dnsdig_domain::{Domain, QueryError, QueryType, RawAnswer};
use tracing::debug;

/// Query client for RFC 8484 wire-format endpoints.
///
/// A type token that names no DNS type fails with `EBADQUERY` without a
/// network round trip.
pub struct WireDohClient {
    transport: HttpsTransport,
    empty_answer_as_nodata: bool,
}

impl WireDohClient {
    pub fn new(transport: HttpsTransport, empty_answer_as_nodata: bool) -> Self {
        Self {
            transport,
            empty_answer_as_nodata,
        }
    }
}

#[async_trait]
impl DnsQueryClient for WireDohClient {
    async fn query(
        &self,
        domain: &Domain,
        query_type: &QueryType,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        let Some(hickory_type) = RecordTypeMapper::query_type_to_hickory(query_type) else {
            debug!(record_type = %query_type, "Unrecognised type token");
            return Err(QueryError::resolver(rcode::BAD_QUERY));
        };

        let message = MessageBuilder::build_query(domain.as_str(), hickory_type).map_err(|e| {
            debug!(error = %e, "Could not build DNS query");
            QueryError::resolver(rcode::BAD_QUERY)
        })?;

        let reply = self.transport.send_message(&message).await?;

        let response = ResponseParser::parse_bytes(reply).map_err(|e| {
            QueryError::transport(format!(
                "DoH server {} returned an unreadable DNS message: {}",
                self.transport.url(),
                e
            ))
        })?;

        if let Some(code) = rcode::failure_code(response.rcode_value()) {
            return Err(QueryError::resolver(code));
        }

        if response.is_nodata() && self.empty_answer_as_nodata {
            return Err(QueryError::resolver(rcode::NO_DATA));
        }

        Ok(response.answers)
    }

    fn transport_name(&self) -> &'static str {
        "doh-wire"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_unknown_token_fails_without_network() {
        // Unroutable upstream: any network attempt would surface as transport
        let client = WireDohClient::new(
            HttpsTransport::new("http://127.0.0.1:9/dns-query", Duration::from_millis(200)),
            false,
        );

        let result = client
            .query(&Domain::from_normalized("example.com"), &QueryType::parse("BOGUS"))
            .await;

        assert_eq!(result, Err(QueryError::resolver("EBADQUERY")));
    }
}
