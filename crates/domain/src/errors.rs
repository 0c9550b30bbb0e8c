use crate::domain_name::DomainRejection;
use thiserror::Error;

/// Request-level failures. Per-type resolver failures never surface here;
/// they are folded into a `QueryOutcome::Failure` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing domain")]
    MissingDomain,

    #[error("Invalid domain format: {0}")]
    InvalidDomainFormat(DomainRejection),

    #[error("Upstream DNS query failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Unexpected error occurred while querying DNS: {0}")]
    Internal(String),
}

impl From<DomainRejection> for DomainError {
    fn from(rejection: DomainRejection) -> Self {
        match rejection {
            DomainRejection::Empty => DomainError::MissingDomain,
            other => DomainError::InvalidDomainFormat(other),
        }
    }
}

/// Failure signal of a single `(domain, type)` query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The resolver answered (or timed out) with a failure that belongs to
    /// this one record type. `code` is a short machine code such as
    /// `SERVFAIL` or `ENOTFOUND`, when one could be extracted.
    #[error("resolver reported {}", .code.as_deref().unwrap_or("UNKNOWN"))]
    Resolver { code: Option<String> },

    /// The resolver transport itself could not be used. No per-type
    /// classification is possible.
    #[error("transport failure: {message}")]
    Transport { message: String },
}

impl QueryError {
    pub fn resolver(code: impl Into<String>) -> Self {
        QueryError::Resolver {
            code: Some(code.into()),
        }
    }

    pub fn uncoded() -> Self {
        QueryError::Resolver { code: None }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        QueryError::Transport {
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            QueryError::Resolver { code } => code.as_deref(),
            QueryError::Transport { .. } => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Transport { .. })
    }
}
