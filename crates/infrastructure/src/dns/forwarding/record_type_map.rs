use dnsdig_domain::{QueryType, RecordType};
use hickory_proto::rr::RecordType as HickoryRecordType;
use std::str::FromStr;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a domain RecordType to the hickory type used on the wire
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::SOA => HickoryRecordType::SOA,
        }
    }

    /// Resolve any query type token to a hickory type.
    ///
    /// Tokens outside the supported set are accepted as a hickory mnemonic
    /// (`SRV`, `PTR`) or in the generic `TYPEnnn` form. Returns `None` when
    /// the token names no DNS type at all.
    pub fn query_type_to_hickory(query_type: &QueryType) -> Option<HickoryRecordType> {
        match query_type {
            QueryType::Known(record_type) => Some(Self::to_hickory(record_type)),
            QueryType::Other(token) => Self::parse_token(token),
        }
    }

    fn parse_token(token: &str) -> Option<HickoryRecordType> {
        let upper = token.trim().to_ascii_uppercase();

        if let Some(code) = upper.strip_prefix("TYPE") {
            if let Ok(code) = code.parse::<u16>() {
                return Some(HickoryRecordType::from(code));
            }
        }

        match HickoryRecordType::from_str(&upper) {
            Ok(HickoryRecordType::Unknown(_)) | Err(_) => None,
            Ok(rt) => Some(rt),
        }
    }
}
