use super::group_resolver::GroupResolver;
use crate::ports::{NoopProgressObserver, ProgressObserver, RoundReport};
use ferrous_sweep_domain::{EndpointSet, QueryOutcome, RoundResult};
use futures::future::join_all;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Runs one round: shuffles the pending domains, deals each one to a
/// uniformly random endpoint, resolves every non-empty shard concurrently
/// and merges the shard partitions.
pub struct RoundOrchestrator {
    endpoints: EndpointSet,
    group_resolver: GroupResolver,
    observer: Arc<dyn ProgressObserver>,
    seed: Option<u64>,
}

impl RoundOrchestrator {
    pub fn new(endpoints: EndpointSet, group_resolver: GroupResolver) -> Self {
        Self {
            endpoints,
            group_resolver,
            observer: Arc::new(NoopProgressObserver),
            seed: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Makes shuffling and endpoint assignment reproducible. Each round
    /// derives its own generator from the seed and the round number.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    pub async fn resolve_round(
        &self,
        domains: Vec<Arc<str>>,
        round: u32,
        cancel: &CancellationToken,
    ) -> RoundResult {
        let total = domains.len();
        self.observer.round_started(round, total, self.endpoints.len());

        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed.wrapping_add(u64::from(round))),
            None => fastrand::Rng::new(),
        };
        let shards = assign_shards(domains, self.endpoints.len(), &mut rng);

        let mut pending = Vec::with_capacity(shards.len());
        let mut handles = Vec::with_capacity(shards.len());
        for (shard, endpoint) in shards.into_iter().zip(self.endpoints.iter()) {
            if shard.is_empty() {
                continue;
            }
            debug!(round, endpoint = %endpoint, domains = shard.len(), "Dispatching shard");

            // Shared with the task so a failed join can still classify it.
            let shard: Arc<[Arc<str>]> = shard.into();
            let resolver = self.group_resolver.clone();
            let endpoint = *endpoint;
            let cancel = cancel.clone();
            pending.push(Arc::clone(&shard));
            handles.push(tokio::spawn(async move {
                resolver.resolve_shard(&shard, &endpoint, &cancel).await
            }));
        }

        let mut merged = RoundResult::with_capacity(total);
        for (joined, shard) in join_all(handles).await.into_iter().zip(pending) {
            match joined {
                Ok(result) => merged.absorb(result),
                Err(e) => {
                    // The shard's domains still need a classification.
                    warn!(round, error = %e, domains = shard.len(), "Shard task failed");
                    for domain in shard.iter() {
                        merged.push(Arc::clone(domain), QueryOutcome::Error);
                    }
                }
            }
        }

        self.observer.round_completed(&RoundReport {
            round,
            domains: total,
            endpoints: self.endpoints.len(),
            resolved: merged.resolved.len(),
            failed: merged.failed.len(),
            tally: merged.tally,
        });

        merged
    }
}

/// Shuffles `domains` and deals each one to an independently drawn shard
/// index in `[0, shard_count)`. Shard sizes are balanced only on average.
pub fn assign_shards(
    mut domains: Vec<Arc<str>>,
    shard_count: usize,
    rng: &mut fastrand::Rng,
) -> Vec<Vec<Arc<str>>> {
    if shard_count == 0 {
        return Vec::new();
    }
    rng.shuffle(&mut domains);

    let mut shards: Vec<Vec<Arc<str>>> = vec![Vec::new(); shard_count];
    for domain in domains {
        shards[rng.usize(..shard_count)].push(domain);
    }
    shards
}
