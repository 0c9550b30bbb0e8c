use serde::{Deserialize, Serialize};

/// One resolver record, passed through to the caller without interpretation.
///
/// Field names follow the DNS JSON API (`name`, `type`, `TTL`, `data`) so
/// JSON answers can be forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub name: String,

    /// Numeric record type code
    #[serde(rename = "type", default)]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    /// Record payload in presentation format
    #[serde(default)]
    pub data: String,
}

impl RawAnswer {
    pub fn new(
        name: impl Into<String>,
        record_type: u16,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}
