use async_trait::async_trait;
use ferrous_sweep_domain::{QueryOutcome, ResolverEndpoint};
use std::sync::Arc;

/// Existence query against a single, fixed resolver endpoint.
///
/// Implementations are total: timeouts, NXDOMAIN, server failures, malformed
/// responses and transport errors all come back as a non-`Resolved`
/// [`QueryOutcome`]. Nothing is retried inside a query; retries happen at
/// round level against a different endpoint.
#[async_trait]
pub trait ProbeClient: Send + Sync {
    async fn query_exists(&self, domain: &str) -> QueryOutcome;
}

/// Creates one query client per (shard, round), bound to one endpoint.
///
/// The per-query timeout is owned by the factory.
pub trait ProbeClientFactory: Send + Sync {
    fn client_for(&self, endpoint: &ResolverEndpoint) -> Arc<dyn ProbeClient>;
}
