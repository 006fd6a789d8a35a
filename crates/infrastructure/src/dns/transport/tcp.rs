use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_sweep_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (RFC 1035 §4.2.2 two-byte length framing).
///
/// Used as the fallback when a UDP answer comes back truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<TransportResponse, DomainError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::Transport(format!(
                "DNS message too large for TCP framing: {} bytes",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            DomainError::Transport(format!("Failed to connect to {}: {}", self.server_addr, e))
        })?;

        let mut frame = Vec::with_capacity(message_bytes.len() + 2);
        frame.extend_from_slice(&len.to_be_bytes());
        frame.extend_from_slice(message_bytes);
        stream.write_all(&frame).await.map_err(|e| {
            DomainError::Transport(format!("Failed to send TCP query to {}: {}", self.server_addr, e))
        })?;

        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await.map_err(|e| {
            DomainError::Transport(format!(
                "Failed to read TCP length from {}: {}",
                self.server_addr, e
            ))
        })?;
        let response_len = u16::from_be_bytes(len_buf) as usize;

        let mut bytes = vec![0u8; response_len];
        stream.read_exact(&mut bytes).await.map_err(|e| {
            DomainError::Transport(format!(
                "Failed to read TCP response from {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(server = %self.server_addr, bytes_received = response_len, "TCP response received");

        Ok(TransportResponse { bytes })
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
