use bytes::Bytes;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use sieve_dns_domain::DomainError;
use tracing::debug;

/// The parts of an upstream reply the forwarder needs. The wire bytes are
/// kept as received.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,
    pub rcode: ResponseCode,
    /// Smallest TTL across the answer section
    pub min_ttl: Option<u32>,
    pub raw_bytes: Bytes,
}

impl DnsResponse {
    pub fn rcode_u16(&self) -> u16 {
        u16::from(self.rcode)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses DNS response from owned bytes (zero-copy for raw_bytes).
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set on upstream reply".to_string(),
            ));
        }

        let min_ttl = message.answers().iter().map(|r| r.ttl()).min();
        let rcode = message.response_code();

        debug!(
            rcode = %Self::rcode_to_status(rcode),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            min_ttl,
            raw_bytes: response_bytes,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::{OpCode, Query};
    use hickory_proto::rr::rdata::A;
    use hickory_proto::rr::{Name, RData, Record, RecordType};
    use hickory_proto::serialize::binary::BinEncodable;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    fn reply(ttls: &[u32]) -> Vec<u8> {
        let name = Name::from_str("example.com.").unwrap();
        let mut message = Message::new();
        message
            .set_id(4242)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .add_query(Query::query(name.clone(), RecordType::A));
        for ttl in ttls {
            message.add_answer(Record::from_rdata(
                name.clone(),
                *ttl,
                RData::A(A(Ipv4Addr::new(93, 184, 216, 34))),
            ));
        }
        message.to_vec().unwrap()
    }

    #[test]
    fn test_parse_extracts_id_and_min_ttl() {
        let response = ResponseParser::parse(&reply(&[3600, 120])).unwrap();
        assert_eq!(response.id, 4242);
        assert_eq!(response.min_ttl, Some(120));
        assert_eq!(response.rcode, ResponseCode::NoError);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ResponseParser::parse(&[0x01, 0x02, 0x03]),
            Err(DomainError::InvalidDnsResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_queries() {
        let mut message = Message::new();
        message.set_id(1).set_message_type(MessageType::Query);
        let bytes = message.to_vec().unwrap();
        assert!(ResponseParser::parse(&bytes).is_err());
    }
}
