//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// RFC 8484 §4.1: DoH clients SHOULD use ID 0 so responses stay cacheable
const DOH_MESSAGE_ID: u16 = 0;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `domain` and serialize it.
    ///
    /// The name is made fully qualified before encoding.
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Vec<u8>, String> {
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        let name = Name::from_str(&fqdn)
            .map_err(|e| format!("Invalid domain '{}': {}", domain, e))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new();
        message
            .set_id(DOH_MESSAGE_ID)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, String> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| format!("Failed to serialize DNS message: {}", e))?;

        Ok(buf)
    }
}
