use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record types this service knows how to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    AAAA,
    MX,
    NS,
    TXT,
    CAA,
    SOA,
}

impl RecordType {
    /// Canonical iteration order. `ALL` lookups report outcomes in this order.
    pub const ALL: [RecordType; 7] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::MX,
        RecordType::NS,
        RecordType::TXT,
        RecordType::CAA,
        RecordType::SOA,
    ];

    pub fn all() -> &'static [RecordType] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::CAA => "CAA",
            RecordType::SOA => "SOA",
        }
    }

    /// Convert from wire format number (RFC 1035, RFC 3596, RFC 8659)
    ///
    /// Returns `None` for types outside the supported set.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            6 => Some(RecordType::SOA),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            257 => Some(RecordType::CAA),
            _ => None,
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::SOA => 6,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::CAA => 257,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "TXT" => Ok(RecordType::TXT),
            "CAA" => Ok(RecordType::CAA),
            "SOA" => Ok(RecordType::SOA),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}
