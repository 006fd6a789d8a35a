use super::round_orchestrator::RoundOrchestrator;
use crate::ports::{NoopProgressObserver, ProgressObserver};
use ferrous_sweep_domain::{BatchOutcome, StopReason};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

pub const DEFAULT_MIN_SUCCESS_THRESHOLD: usize = 10;

/// When the retry loop gives up on the domains still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Hard cap on rounds; `None` runs until the threshold stops the loop.
    pub max_rounds: Option<u32>,
    /// A round resolving fewer than this many domains is the last one.
    pub min_success_threshold: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_rounds: None,
            min_success_threshold: DEFAULT_MIN_SUCCESS_THRESHOLD,
        }
    }
}

/// Drives successive rounds over the shrinking set of unresolved domains.
///
/// Round `n + 1` only starts after round `n` has joined all of its shards.
/// The domains a round fails to resolve are exactly the input of the next
/// round, so `resolved` only grows and `pending` only shrinks.
pub struct BatchResolver {
    orchestrator: RoundOrchestrator,
    policy: RetryPolicy,
    observer: Arc<dyn ProgressObserver>,
    cancel: CancellationToken,
}

impl BatchResolver {
    pub fn new(orchestrator: RoundOrchestrator) -> Self {
        Self {
            orchestrator,
            policy: RetryPolicy::default(),
            observer: Arc::new(NoopProgressObserver),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    #[instrument(skip_all, fields(domains = domains.len()))]
    pub async fn batch_resolve(&self, domains: Vec<Arc<str>>) -> BatchOutcome {
        let start = Instant::now();
        let mut resolved: Vec<Arc<str>> = Vec::with_capacity(domains.len());
        let mut pending = domains;
        let mut round: u32 = 1;
        let mut rounds_executed: u32 = 0;

        let stop_reason = loop {
            if pending.is_empty() {
                break StopReason::AllResolved;
            }
            if self.cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if self.policy.max_rounds.is_some_and(|max| round > max) {
                break StopReason::RoundBudgetExhausted;
            }

            let result = self
                .orchestrator
                .resolve_round(pending, round, &self.cancel)
                .await;
            rounds_executed += 1;

            let newly_resolved = result.resolved.len();
            resolved.extend(result.resolved);
            pending = result.failed;
            debug!(
                round,
                newly_resolved,
                total_resolved = resolved.len(),
                pending = pending.len(),
                "Round folded"
            );

            if self.cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if pending.is_empty() {
                break StopReason::AllResolved;
            }
            if newly_resolved < self.policy.min_success_threshold {
                self.observer.below_threshold(
                    round,
                    newly_resolved,
                    self.policy.min_success_threshold,
                );
                break StopReason::BelowThreshold;
            }

            round += 1;
        };

        let outcome = BatchOutcome {
            resolved,
            unresolved: pending,
            rounds_executed,
            elapsed: start.elapsed(),
            stop_reason,
        };
        self.observer.batch_completed(&outcome.summary());
        outcome
    }
}
