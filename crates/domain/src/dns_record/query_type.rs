use super::RecordType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Type token sent to the DNS query client.
///
/// Tokens outside the known set are forwarded verbatim; the record type
/// space is defined by the resolver, so an unknown token is reported back
/// as a per-type failure rather than rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Known(RecordType),
    Other(Arc<str>),
}

impl QueryType {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<RecordType>() {
            Ok(rt) => QueryType::Known(rt),
            Err(_) => QueryType::Other(Arc::from(token)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            QueryType::Known(rt) => rt.as_str(),
            QueryType::Other(token) => token,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            QueryType::Known(rt) => Some(*rt),
            QueryType::Other(_) => None,
        }
    }
}

impl From<RecordType> for QueryType {
    fn from(rt: RecordType) -> Self {
        QueryType::Known(rt)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QueryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What the caller asked for: one type, or every supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelector {
    All,
    Single(QueryType),
}

impl TypeSelector {
    pub const ALL_TOKEN: &'static str = "ALL";

    /// Missing or blank selectors default to `A`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => TypeSelector::Single(QueryType::Known(RecordType::A)),
            Some(token) if token.eq_ignore_ascii_case(Self::ALL_TOKEN) => TypeSelector::All,
            Some(token) => TypeSelector::Single(QueryType::parse(token)),
        }
    }

    /// The types actually queried. `All` never reaches the client as a token.
    pub fn expand(&self) -> Vec<QueryType> {
        match self {
            TypeSelector::All => RecordType::all()
                .iter()
                .copied()
                .map(QueryType::Known)
                .collect(),
            TypeSelector::Single(qt) => vec![qt.clone()],
        }
    }
}

impl Default for TypeSelector {
    fn default() -> Self {
        TypeSelector::Single(QueryType::Known(RecordType::A))
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelector::All => f.write_str(Self::ALL_TOKEN),
            TypeSelector::Single(qt) => qt.fmt(f),
        }
    }
}
