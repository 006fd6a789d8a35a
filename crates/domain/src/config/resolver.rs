use crate::endpoint::{EndpointSet, DEFAULT_DNS_SERVERS};
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upstream servers queried in parallel, `ip` or `ip:port`
    /// (default: 12 well-known public resolvers)
    #[serde(default = "default_dns_servers")]
    pub dns_servers: Vec<String>,

    /// Per-query timeout in milliseconds (default: 3000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum in-flight queries against a single server (default: 50)
    #[serde(default = "default_concurrency_per_group")]
    pub concurrency_per_group: usize,

    /// Hard cap on retry rounds; unbounded when absent
    #[serde(default)]
    pub max_rounds: Option<u32>,

    /// A round resolving fewer domains than this ends the run (default: 10)
    #[serde(default = "default_min_success_threshold")]
    pub min_success_threshold: usize,

    /// Seeds domain shuffling and endpoint assignment for reproducible runs
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl ResolverConfig {
    pub fn endpoints(&self) -> Result<EndpointSet, DomainError> {
        EndpointSet::parse(&self.dns_servers)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dns_servers: default_dns_servers(),
            timeout_ms: default_timeout_ms(),
            concurrency_per_group: default_concurrency_per_group(),
            max_rounds: None,
            min_success_threshold: default_min_success_threshold(),
            shuffle_seed: None,
        }
    }
}

fn default_dns_servers() -> Vec<String> {
    DEFAULT_DNS_SERVERS.iter().map(|s| s.to_string()).collect()
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_concurrency_per_group() -> usize {
    50
}

fn default_min_success_threshold() -> usize {
    10
}
