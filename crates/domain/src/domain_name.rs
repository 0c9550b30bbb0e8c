use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A validated, normalized domain name.
///
/// Only a `DomainValidator` implementation should build one: the value is
/// non-empty, has a registrable part under a known public suffix and is never
/// an IP literal. Uses `Arc<str>` so fan-out tasks can share it cheaply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(Arc<str>);

impl Domain {
    pub fn from_normalized(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Why raw input was not accepted as a domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainRejection {
    #[error("no domain given")]
    Empty,

    #[error("malformed domain '{0}'")]
    Malformed(String),

    #[error("'{0}' is an IP address literal")]
    IsIpLiteral(String),
}
