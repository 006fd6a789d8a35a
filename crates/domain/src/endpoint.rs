use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DNS_PORT: u16 = 53;

/// Well-known public resolvers used when no endpoint list is configured.
pub const DEFAULT_DNS_SERVERS: &[&str] = &[
    "8.8.8.8",
    "1.1.1.1",
    "223.5.5.5",
    "119.29.29.29",
    "208.67.222.222",
    "9.9.9.9",
    "149.112.112.112",
    "8.8.4.4",
    "1.0.0.1",
    "223.6.6.6",
    "45.11.45.11",
    "4.2.2.2",
];

/// One upstream DNS server used as an independent query target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolverEndpoint {
    addr: SocketAddr,
}

impl ResolverEndpoint {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl FromStr for ResolverEndpoint {
    type Err = DomainError;

    /// Accepts `ip`, `ip:port` and `[v6]:port`; the port defaults to 53.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(Self::new(addr));
        }
        let bare = s.trim_start_matches('[').trim_end_matches(']');
        bare.parse::<IpAddr>()
            .map(|ip| Self::new(SocketAddr::new(ip, DNS_PORT)))
            .map_err(|_| DomainError::InvalidEndpoint(s.to_string()))
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.addr.port() == DNS_PORT {
            write!(f, "{}", self.addr.ip())
        } else {
            write!(f, "{}", self.addr)
        }
    }
}

/// Fixed, non-empty list of resolver endpoints for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    endpoints: Vec<ResolverEndpoint>,
}

impl EndpointSet {
    pub fn new(endpoints: Vec<ResolverEndpoint>) -> Result<Self, DomainError> {
        if endpoints.is_empty() {
            return Err(DomainError::EmptyEndpointSet);
        }
        Ok(Self { endpoints })
    }

    pub fn parse<S: AsRef<str>>(servers: &[S]) -> Result<Self, DomainError> {
        let endpoints = servers
            .iter()
            .map(|s| s.as_ref().parse::<ResolverEndpoint>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(endpoints)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolverEndpoint> {
        self.endpoints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolverEndpoint> {
        self.endpoints.iter()
    }
}

impl Default for EndpointSet {
    fn default() -> Self {
        let endpoints = DEFAULT_DNS_SERVERS
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        Self { endpoints }
    }
}

impl<'a> IntoIterator for &'a EndpointSet {
    type Item = &'a ResolverEndpoint;
    type IntoIter = std::slice::Iter<'a, ResolverEndpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
