use bytes::Bytes;
use dnsdig_domain::RawAnswer;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    /// Answer section in presentation form
    pub answers: Vec<RawAnswer>,
}

impl DnsResponse {
    pub fn rcode_value(&self) -> u16 {
        u16::from(self.rcode)
    }

    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.answers.is_empty()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, String> {
        let message = Message::from_vec(&response_bytes)
            .map_err(|e| format!("Failed to parse DNS response: {}", e))?;

        if message.message_type() != MessageType::Response {
            return Err("Upstream returned a DNS query instead of a response".to_string());
        }

        let rcode = message.response_code();
        let answers: Vec<RawAnswer> = message.answers().iter().map(Self::to_raw_answer).collect();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse { rcode, answers })
    }

    /// Same shape a JSON DoH server reports: owner name without the root
    /// dot, numeric type, TTL and RDATA in presentation form.
    fn to_raw_answer(record: &Record) -> RawAnswer {
        let name = record.name().to_utf8();
        let name = name.strip_suffix('.').unwrap_or(&name);

        RawAnswer::new(
            name,
            u16::from(record.record_type()),
            record.ttl(),
            record.data().to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{OpCode, Query};
    use hickory_proto::rr::rdata::{A, MX};
    use hickory_proto::rr::{Name, RData, RecordType};
    use hickory_proto::serialize::binary::BinEncodable;
    use std::str::FromStr;

    fn response(rcode: ResponseCode, answers: Vec<Record>) -> Bytes {
        let mut message = Message::new();
        message
            .set_id(0)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_response_code(rcode);
        message.add_query(Query::query(
            Name::from_str("example.com.").unwrap(),
            RecordType::A,
        ));
        message.add_answers(answers);
        Bytes::from(message.to_bytes().unwrap())
    }

    #[test]
    fn test_answers_are_rendered_in_presentation_form() {
        let name = Name::from_str("example.com.").unwrap();
        let bytes = response(
            ResponseCode::NoError,
            vec![
                Record::from_rdata(name.clone(), 300, RData::A(A::new(93, 184, 216, 34))),
                Record::from_rdata(
                    name,
                    3600,
                    RData::MX(MX::new(10, Name::from_str("mail.example.com.").unwrap())),
                ),
            ],
        );

        let parsed = ResponseParser::parse_bytes(bytes).unwrap();

        assert_eq!(parsed.rcode_value(), 0);
        assert_eq!(
            parsed.answers,
            vec![
                RawAnswer::new("example.com", 1, 300, "93.184.216.34"),
                RawAnswer::new("example.com", 15, 3600, "10 mail.example.com."),
            ]
        );
    }

    #[test]
    fn test_nxdomain_carries_rcode() {
        let parsed = ResponseParser::parse_bytes(response(ResponseCode::NXDomain, vec![])).unwrap();
        assert_eq!(parsed.rcode_value(), 3);
        assert!(!parsed.is_nodata());
    }

    #[test]
    fn test_empty_noerror_is_nodata() {
        let parsed = ResponseParser::parse_bytes(response(ResponseCode::NoError, vec![])).unwrap();
        assert!(parsed.is_nodata());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(ResponseParser::parse_bytes(Bytes::from_static(b"<html>")).is_err());
    }
}
