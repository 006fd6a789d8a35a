//! DNS Message Builder
//!
//! Constructs existence-check queries in wire format using `hickory-proto`.

use ferrous_sweep_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an `A` query for `domain` and return its ID with the wire bytes.
    ///
    /// An `A` lookup is the cheapest question whose positive answer proves the
    /// name resolves. The query is recursive (RD set) with a random ID.
    pub fn build_existence_query(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        Self::build_query(domain, RecordType::A)
    }

    fn build_query(domain: &str, record_type: RecordType) -> Result<(u16, Vec<u8>), DomainError> {
        let mut name = Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(record_type);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(serialization_error)?;

        Ok(buf)
    }
}

/// A query that cannot be encoded never reaches the wire, so it is reported
/// as a transport failure rather than blamed on the domain name.
fn serialization_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::Transport(format!("Failed to serialize DNS message: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existence_query_header() {
        let (id, bytes) = MessageBuilder::build_existence_query("example.com").unwrap();

        assert!(bytes.len() > 12);
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), id);
        // QR=0, opcode QUERY, RD=1
        assert_eq!(bytes[2], 0x01);
        // exactly one question
        assert_eq!(&bytes[4..6], &[0x00, 0x01]);
    }

    #[test]
    fn test_existence_query_asks_for_a_record() {
        let (_, bytes) = MessageBuilder::build_existence_query("example.com").unwrap();

        let parsed = Message::from_vec(&bytes).unwrap();
        let query = &parsed.queries()[0];
        assert_eq!(query.query_type(), RecordType::A);
        assert_eq!(query.name().to_ascii(), "example.com.");
    }

    #[test]
    fn test_serialization_failure_is_transport_error() {
        let err = serialization_error("label pointer out of range");
        match err {
            DomainError::Transport(msg) => assert!(msg.contains("label pointer out of range")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overlong_label_is_rejected() {
        let label = "a".repeat(64);
        let err = MessageBuilder::build_existence_query(&format!("{label}.com")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDomainName(_)));
    }
}
