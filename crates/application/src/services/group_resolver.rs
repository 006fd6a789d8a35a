use crate::ports::{ProbeClient, ProbeClientFactory};
use ferrous_sweep_domain::{QueryOutcome, ResolverEndpoint, RoundResult};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_CONCURRENCY_PER_GROUP: usize = 50;

/// Resolves one shard of domains against one endpoint for one round.
///
/// At most `concurrency` queries are in flight against the endpoint at any
/// instant. Each query result is collected privately and folded into the
/// shard's partition only after it completes, so no shared container is
/// written concurrently.
#[derive(Clone)]
pub struct GroupResolver {
    factory: Arc<dyn ProbeClientFactory>,
    concurrency: usize,
}

impl GroupResolver {
    pub fn new(factory: Arc<dyn ProbeClientFactory>) -> Self {
        Self {
            factory,
            concurrency: DEFAULT_CONCURRENCY_PER_GROUP,
        }
    }

    /// Sets the per-endpoint admission limit. Values below 1 are raised to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Every input domain lands in exactly one side of the returned partition.
    /// Queries still waiting or in flight when `cancel` fires count as failed.
    pub async fn resolve_shard(
        &self,
        domains: &[Arc<str>],
        endpoint: &ResolverEndpoint,
        cancel: &CancellationToken,
    ) -> RoundResult {
        let mut result = RoundResult::with_capacity(domains.len());
        if domains.is_empty() {
            return result;
        }

        let client = self.factory.client_for(endpoint);
        let client: &dyn ProbeClient = client.as_ref();
        let gate = Semaphore::new(self.concurrency);
        let gate = &gate;

        debug!(
            endpoint = %endpoint,
            domains = domains.len(),
            concurrency = self.concurrency,
            "Resolving shard"
        );

        let mut in_flight: FuturesUnordered<_> = domains
            .iter()
            .map(|domain| async move {
                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => QueryOutcome::Cancelled,
                    outcome = admitted_query(client, gate, domain) => outcome,
                };
                (Arc::clone(domain), outcome)
            })
            .collect();

        while let Some((domain, outcome)) = in_flight.next().await {
            result.push(domain, outcome);
        }

        debug!(
            endpoint = %endpoint,
            resolved = result.resolved.len(),
            failed = result.failed.len(),
            "Shard complete"
        );

        result
    }
}

async fn admitted_query(client: &dyn ProbeClient, gate: &Semaphore, domain: &str) -> QueryOutcome {
    match gate.acquire().await {
        Ok(_permit) => client.query_exists(domain).await,
        Err(_) => QueryOutcome::Error,
    }
}
