use crate::dns::rcode;
use crate::dns::transport::HttpsTransport;
use async_trait::async_trait;
use dnsdig_application::ports::DnsQueryClient;
use dnsdig_domain::{Domain, QueryError, QueryType, RawAnswer};
use serde::Deserialize;
use tracing::debug;

/// Response body of the JSON DoH API (`application/dns-json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DohJsonResponse {
    pub status: u16,

    #[serde(rename = "TC", default)]
    pub truncated: bool,

    #[serde(default)]
    pub question: Vec<DohJsonQuestion>,

    #[serde(default)]
    pub answer: Vec<RawAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DohJsonQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

/// Query client for JSON DoH endpoints (Cloudflare, Google).
///
/// Query type tokens are forwarded verbatim; the upstream answers HTTP 400
/// for tokens it does not recognise.
pub struct JsonDohClient {
    transport: HttpsTransport,
    empty_answer_as_nodata: bool,
}

impl JsonDohClient {
    pub fn new(transport: HttpsTransport, empty_answer_as_nodata: bool) -> Self {
        Self {
            transport,
            empty_answer_as_nodata,
        }
    }

    fn interpret(&self, response: DohJsonResponse) -> Result<Vec<RawAnswer>, QueryError> {
        if let Some(code) = rcode::failure_code(response.status) {
            return Err(QueryError::resolver(code));
        }

        if response.truncated {
            debug!("Upstream flagged JSON answer as truncated");
        }

        if response.answer.is_empty() && self.empty_answer_as_nodata {
            return Err(QueryError::resolver(rcode::NO_DATA));
        }

        Ok(response.answer)
    }
}

#[async_trait]
impl DnsQueryClient for JsonDohClient {
    async fn query(
        &self,
        domain: &Domain,
        query_type: &QueryType,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        let body = self
            .transport
            .get_json(domain.as_str(), query_type.as_str())
            .await?;

        let response: DohJsonResponse = serde_json::from_slice(&body).map_err(|e| {
            QueryError::transport(format!(
                "DoH server {} returned an unreadable JSON body: {}",
                self.transport.url(),
                e
            ))
        })?;

        self.interpret(response)
    }

    fn transport_name(&self) -> &'static str {
        "doh-json"
    }
}
