use ferrous_sweep_domain::{DomainError, QueryOutcome};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub addresses: Vec<IpAddr>,

    pub rcode: ResponseCode,

    pub truncated: bool,
}

impl DnsResponse {
    /// Classifies the response for the existence check. A name counts as
    /// resolvable only when the server answered NOERROR with at least one
    /// address record. An alias chain that ends without an address does not
    /// count.
    pub fn outcome(&self) -> QueryOutcome {
        match self.rcode {
            ResponseCode::NoError if !self.addresses.is_empty() => QueryOutcome::Resolved,
            ResponseCode::NoError | ResponseCode::NXDomain => QueryOutcome::NotFound,
            _ => QueryOutcome::ServerFailure,
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut addresses = Vec::with_capacity(message.answers().len().min(8));
        let mut cname_hops = 0usize;

        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                RData::CNAME(_) => cname_hops += 1,
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            cname_hops,
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            addresses,
            rcode,
            truncated,
        })
    }
}
