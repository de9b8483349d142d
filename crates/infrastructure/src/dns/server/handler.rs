use crate::dns::forwarding::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::serialize::binary::BinEncodable;
use sieve_dns_application::use_cases::{DnsReply, HandleDnsQueryUseCase};
use sieve_dns_domain::DnsQuery;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Wire-level adapter around the resolution use case.
///
/// Decodes a client datagram, runs the query through the pipeline and
/// encodes the reply: NXDOMAIN when blocked, SERVFAIL when every upstream
/// failed, otherwise the cached or upstream payload with the client's ID and
/// question spelling.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when the datagram should be dropped without a reply.
    pub async fn handle_packet(&self, packet: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(packet) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client_ip, error = %e, "Dropping malformed DNS packet");
                return None;
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client_ip, "Dropping non-query DNS packet");
            return None;
        }

        let Some(question) = request.queries().first() else {
            return error_response(&request, ResponseCode::FormErr);
        };

        let query = DnsQuery::new(
            question.name().to_ascii(),
            RecordTypeMapper::from_hickory(question.query_type()),
        );

        match self.use_case.execute(&query, client_ip).await {
            DnsReply::Blocked => error_response(&request, ResponseCode::NXDomain),
            DnsReply::ServerFailure => error_response(&request, ResponseCode::ServFail),
            DnsReply::Answer { payload, .. } => {
                passthrough(&payload.wire, packet)
                    .or_else(|| error_response(&request, ResponseCode::ServFail))
            }
        }
    }
}

const HEADER_LEN: usize = 12;

/// Upstream bytes, untouched apart from the transaction ID and the question
/// name's letter case, both taken from the client's packet. Resolvers that
/// randomise case (0x20 encoding) expect their spelling echoed back; cached
/// payloads carry whatever spelling the first asker used.
fn passthrough(wire: &[u8], request: &[u8]) -> Option<Vec<u8>> {
    if wire.len() < HEADER_LEN || request.len() < HEADER_LEN {
        return None;
    }
    let mut bytes = wire.to_vec();
    bytes[..2].copy_from_slice(&request[..2]);

    let has_question = bytes[4..6] != [0, 0];
    if let Some(end) = question_end(request).filter(|_| has_question) {
        let name_end = end - 4;
        let same_question = end <= bytes.len()
            && bytes[HEADER_LEN..name_end].eq_ignore_ascii_case(&request[HEADER_LEN..name_end])
            && bytes[name_end..end] == request[name_end..end];
        if same_question {
            bytes[HEADER_LEN..name_end].copy_from_slice(&request[HEADER_LEN..name_end]);
        }
    }
    Some(bytes)
}

/// Offset just past the first question (name, type, class). `None` when the
/// name is compressed or runs off the end of the packet.
fn question_end(packet: &[u8]) -> Option<usize> {
    let mut pos = HEADER_LEN;
    loop {
        let len = usize::from(*packet.get(pos)?);
        if len == 0 {
            pos += 1;
            break;
        }
        if len & 0xC0 != 0 {
            return None;
        }
        pos += 1 + len;
    }
    let end = pos + 4;
    (end <= packet.len()).then_some(end)
}

/// Header-only reply echoing the client's ID, flags and question.
fn error_response(request: &Message, code: ResponseCode) -> Option<Vec<u8>> {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(request.op_code())
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true)
        .set_response_code(code)
        .add_queries(request.queries().to_vec());

    match response.to_vec() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!(error = %e, "Failed to encode DNS response");
            None
        }
    }
}
