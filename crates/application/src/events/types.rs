use dnsdig_domain::{Domain, QueryType};
use std::fmt;

/// How a single per-type query ended, as seen from the resolver side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    Answered { records: usize },
    Failed { code: Option<String> },
    Unreachable,
}

impl LookupStatus {
    pub fn is_answered(&self) -> bool {
        matches!(self, LookupStatus::Answered { .. })
    }

    /// Metric label: `NOERROR`, the failure code, `UNKNOWN`, or `TRANSPORT`
    pub fn label(&self) -> &str {
        match self {
            LookupStatus::Answered { .. } => "NOERROR",
            LookupStatus::Failed { code: Some(code) } => code,
            LookupStatus::Failed { code: None } => "UNKNOWN",
            LookupStatus::Unreachable => "TRANSPORT",
        }
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStatus::Answered { records } => write!(f, "NOERROR ({} records)", records),
            other => f.write_str(other.label()),
        }
    }
}

/// Emitted once for every query the engine sends to the DNS query client.
#[derive(Debug, Clone)]
pub struct LookupEvent {
    pub domain: Domain,
    pub query_type: QueryType,
    pub status: LookupStatus,
    pub response_time_us: u64,
}

impl LookupEvent {
    pub fn new(
        domain: Domain,
        query_type: QueryType,
        status: LookupStatus,
        response_time_us: u64,
    ) -> Self {
        Self {
            domain,
            query_type,
            status,
            response_time_us,
        }
    }

    pub fn response_time_ms(&self) -> f64 {
        self.response_time_us as f64 / 1000.0
    }
}
