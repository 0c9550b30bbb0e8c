pub mod https;

use super::rcode;
use dnsdig_domain::QueryError;
use reqwest::StatusCode;

pub use https::HttpsTransport;

/// Content type for RFC 8484 wire-format messages
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// Content type for the JSON DoH API
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Map a non-2xx HTTP status to a query error.
///
/// HTTP 400 means the upstream refused the query itself, which is reported
/// per type. Every other status means the upstream is not usable.
pub fn status_error(url: &str, status: StatusCode) -> QueryError {
    if status == StatusCode::BAD_REQUEST {
        return QueryError::resolver(rcode::BAD_QUERY);
    }
    QueryError::transport(format!(
        "DoH server {} returned HTTP {}: {}",
        url,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ))
}

/// Map a reqwest failure (connect, TLS, body read) to a query error.
pub fn request_error(url: &str, error: &reqwest::Error) -> QueryError {
    if error.is_timeout() {
        return QueryError::resolver(rcode::TIMEOUT);
    }
    QueryError::transport(format!("DoH request to {} failed: {}", url, error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_is_a_resolver_failure() {
        let error = status_error("https://dns.example/dns-query", StatusCode::BAD_REQUEST);
        assert_eq!(error, QueryError::resolver("EBADQUERY"));
    }

    #[test]
    fn test_server_errors_are_transport_failures() {
        for status in [
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::NOT_FOUND,
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ] {
            let error = status_error("https://dns.example/dns-query", status);
            assert!(error.is_transport(), "{} should be transport", status);
        }
    }

    #[test]
    fn test_transport_message_names_upstream_and_status() {
        let error = status_error("https://dns.example/dns-query", StatusCode::BAD_GATEWAY);
        let message = error.to_string();
        assert!(message.contains("https://dns.example/dns-query"));
        assert!(message.contains("502"));
    }
}
