use async_trait::async_trait;
use dnsdig_domain::{Domain, QueryError, QueryType, RawAnswer};

/// Issues a single `(domain, type)` lookup against a resolver.
///
/// Implementations decide the transport. They report resolver-side and
/// timeout failures as `QueryError::Resolver` with a short code, and reserve
/// `QueryError::Transport` for a resolver that cannot be reached or spoken to
/// at all. A successful empty list is returned as-is.
#[async_trait]
pub trait DnsQueryClient: Send + Sync {
    async fn query(
        &self,
        domain: &Domain,
        query_type: &QueryType,
    ) -> Result<Vec<RawAnswer>, QueryError>;

    /// Short transport label for logging
    fn transport_name(&self) -> &'static str {
        "unknown"
    }
}
