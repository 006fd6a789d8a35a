use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use ferrous_sweep_application::ports::{ProbeClient, ProbeClientFactory};
use ferrous_sweep_domain::{DomainError, QueryOutcome, ResolverEndpoint};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Existence checker bound to a single endpoint.
///
/// Sends an `A` query over UDP and falls back to TCP when the answer is
/// truncated. The whole exchange, fallback included, is bounded by one
/// timeout.
pub struct DnsProbeClient {
    endpoint: ResolverEndpoint,
    timeout: Duration,
}

impl DnsProbeClient {
    pub fn new(endpoint: ResolverEndpoint, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }

    pub fn endpoint(&self) -> &ResolverEndpoint {
        &self.endpoint
    }

    async fn exchange(&self, domain: &str) -> Result<DnsResponse, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_existence_query(domain)?;

        let udp = Transport::udp(&self.endpoint);
        let response = Self::send_and_parse(&udp, id, &query_bytes, self.timeout).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(
            server = %self.endpoint,
            domain = %domain,
            "Response truncated (TC bit), retrying via TCP"
        );
        let remaining = self
            .timeout
            .checked_sub(start.elapsed())
            .ok_or(DomainError::QueryTimeout)?;
        let tcp = Transport::tcp(&self.endpoint);
        Self::send_and_parse(&tcp, id, &query_bytes, remaining).await
    }

    async fn send_and_parse(
        transport: &Transport,
        id: u16,
        query_bytes: &[u8],
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let raw = transport.send(query_bytes, timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;
        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                transport.protocol_name(),
                response.id,
                id
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl ProbeClient for DnsProbeClient {
    async fn query_exists(&self, domain: &str) -> QueryOutcome {
        let outcome = match tokio::time::timeout(self.timeout, self.exchange(domain)).await {
            Ok(Ok(response)) => response.outcome(),
            Ok(Err(DomainError::QueryTimeout)) | Err(_) => QueryOutcome::Timeout,
            Ok(Err(e)) => {
                debug!(server = %self.endpoint, domain = %domain, error = %e, "Query failed");
                QueryOutcome::Error
            }
        };
        debug!(server = %self.endpoint, domain = %domain, outcome = %outcome, "Existence query");
        outcome
    }
}

/// Hands out one [`DnsProbeClient`] per endpoint with a shared timeout.
#[derive(Debug, Clone, Copy)]
pub struct DnsProbeFactory {
    timeout: Duration,
}

impl DnsProbeFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for DnsProbeFactory {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

impl ProbeClientFactory for DnsProbeFactory {
    fn client_for(&self, endpoint: &ResolverEndpoint) -> Arc<dyn ProbeClient> {
        Arc::new(DnsProbeClient::new(*endpoint, self.timeout))
    }
}
