use crate::dns_record::{QueryType, RawAnswer};
use serde::Serialize;

/// Result of one `(domain, type)` query after error normalization.
///
/// Both variants carry the type they were requested for so callers can
/// correlate outcomes regardless of ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Success {
        #[serde(rename = "type")]
        record_type: QueryType,
        records: Vec<RawAnswer>,
    },
    Failure {
        #[serde(rename = "type")]
        record_type: QueryType,
        error: String,
    },
}

impl QueryOutcome {
    pub fn success(record_type: QueryType, records: Vec<RawAnswer>) -> Self {
        QueryOutcome::Success {
            record_type,
            records,
        }
    }

    pub fn failure(record_type: QueryType, error: impl Into<String>) -> Self {
        QueryOutcome::Failure {
            record_type,
            error: error.into(),
        }
    }

    pub fn record_type(&self) -> &QueryType {
        match self {
            QueryOutcome::Success { record_type, .. } | QueryOutcome::Failure { record_type, .. } => {
                record_type
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Success { .. })
    }

    pub fn records(&self) -> Option<&[RawAnswer]> {
        match self {
            QueryOutcome::Success { records, .. } => Some(records),
            QueryOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryOutcome::Success { .. } => None,
            QueryOutcome::Failure { error, .. } => Some(error),
        }
    }
}

/// Ordered outcomes, one per requested type. Serializes as `{"results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub results: Vec<QueryOutcome>,
}

impl ResolutionResult {
    pub fn new(results: Vec<QueryOutcome>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|o| !o.is_success()).count()
    }
}
