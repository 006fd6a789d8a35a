#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock server answers every query it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// NOERROR with one A record (93.184.216.34).
    Answer,
    /// NOERROR with an empty answer section.
    NoData,
    /// NOERROR with a single CNAME and no address behind it.
    DanglingAlias,
    NxDomain,
    ServFail,
    /// Never replies.
    Silent,
    /// Replies with the ID flipped.
    WrongId,
    /// UDP reply carries the TC bit and no answers; TCP gives the full answer.
    Truncated,
}

/// Small DNS server on loopback for existence-query tests.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts a server on an ephemeral loopback port. In `Truncated` mode a
    /// TCP listener is bound on the same port.
    pub async fn start(mode: MockMode) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let tcp_listener = if mode == MockMode::Truncated {
            Some(TcpListener::bind(addr).await?)
        } else {
            None
        };

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = Arc::clone(&udp_queries);
        let tcp_counter = Arc::clone(&tcp_queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_udp_response(mode, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = accept(tcp_listener.as_ref()) => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = Self::build_response(&query, 0x00, true);
                                let mut frame = (response.len() as u16).to_be_bytes().to_vec();
                                frame.extend_from_slice(&response);
                                let _ = stream.write_all(&frame).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn build_udp_response(mode: MockMode, query: &[u8]) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }
        match mode {
            MockMode::Answer => Some(Self::build_response(query, 0x00, true)),
            MockMode::NoData => Some(Self::build_response(query, 0x00, false)),
            MockMode::DanglingAlias => {
                let mut response = Self::build_response(query, 0x00, false);
                response[7] = 0x01; // ANCOUNT=1
                response.extend_from_slice(&[
                    0xc0, 0x0c, // Name pointer to question
                    0x00, 0x05, // Type CNAME
                    0x00, 0x01, // Class IN
                    0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
                    0x00, 0x07, // Data length
                    4, b'g', b'o', b'n', b'e', 0xc0, 0x0c,
                ]);
                Some(response)
            }
            MockMode::NxDomain => Some(Self::build_response(query, 0x03, false)),
            MockMode::ServFail => Some(Self::build_response(query, 0x02, false)),
            MockMode::Silent => None,
            MockMode::WrongId => {
                let mut response = Self::build_response(query, 0x00, true);
                response[0] ^= 0xff;
                Some(response)
            }
            MockMode::Truncated => {
                let mut response = Self::build_response(query, 0x00, false);
                response[2] |= 0x02; // TC=1
                Some(response)
            }
        }
    }

    /// Echoes the question section and optionally appends one A record.
    fn build_response(query: &[u8], rcode: u8, with_answer: bool) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // Transaction ID
        response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
        response.push(0x80 | rcode); // RA=1, RCODE
        response.extend_from_slice(&query[4..6]); // Questions
        response.extend_from_slice(&[0x00, if with_answer { 0x01 } else { 0x00 }]);
        response.extend_from_slice(&[0x00, 0x00]); // Authority
        response.extend_from_slice(&[0x00, 0x00]); // Additional

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        if with_answer {
            response.extend_from_slice(&[
                0xc0, 0x0c, // Name pointer to question
                0x00, 0x01, // Type A
                0x00, 0x01, // Class IN
                0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
                0x00, 0x04, // Data length: 4 bytes
                93, 184, 216, 34,
            ]);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn accept(
    listener: Option<&TcpListener>,
) -> std::io::Result<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(listener) => listener.accept().await,
        None => std::future::pending().await,
    }
}
