use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Result of one existence query against one endpoint.
///
/// Only `Resolved` counts as success; every other variant is a failed
/// attempt and is retried in a later round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOutcome {
    Resolved,
    NotFound,
    ServerFailure,
    Timeout,
    Error,
    Cancelled,
}

impl QueryOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::NotFound => "not_found",
            Self::ServerFailure => "server_failure",
            Self::Timeout => "timeout",
            Self::Error => "error",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-outcome counters for one shard or round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    pub resolved: usize,
    pub not_found: usize,
    pub server_failure: usize,
    pub timeout: usize,
    pub error: usize,
    pub cancelled: usize,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: QueryOutcome) {
        match outcome {
            QueryOutcome::Resolved => self.resolved += 1,
            QueryOutcome::NotFound => self.not_found += 1,
            QueryOutcome::ServerFailure => self.server_failure += 1,
            QueryOutcome::Timeout => self.timeout += 1,
            QueryOutcome::Error => self.error += 1,
            QueryOutcome::Cancelled => self.cancelled += 1,
        }
    }

    pub fn merge(&mut self, other: &OutcomeTally) {
        self.resolved += other.resolved;
        self.not_found += other.not_found;
        self.server_failure += other.server_failure;
        self.timeout += other.timeout;
        self.error += other.error;
        self.cancelled += other.cancelled;
    }

    pub fn total(&self) -> usize {
        self.resolved
            + self.not_found
            + self.server_failure
            + self.timeout
            + self.error
            + self.cancelled
    }
}

/// Resolved/failed partition produced by one shard, or by a whole round
/// once every shard has been merged.
#[derive(Debug, Clone, Default)]
pub struct RoundResult {
    pub resolved: Vec<Arc<str>>,
    pub failed: Vec<Arc<str>>,
    pub tally: OutcomeTally,
}

impl RoundResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            resolved: Vec::with_capacity(capacity),
            failed: Vec::with_capacity(capacity),
            tally: OutcomeTally::default(),
        }
    }

    pub fn push(&mut self, domain: Arc<str>, outcome: QueryOutcome) {
        self.tally.record(outcome);
        if outcome.is_resolved() {
            self.resolved.push(domain);
        } else {
            self.failed.push(domain);
        }
    }

    /// Takes ownership of another partition's entries.
    pub fn absorb(&mut self, other: RoundResult) {
        self.resolved.extend(other.resolved);
        self.failed.extend(other.failed);
        self.tally.merge(&other.tally);
    }

    pub fn len(&self) -> usize {
        self.resolved.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why the retry loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Nothing left to resolve.
    AllResolved,
    /// A round resolved fewer domains than the early-termination threshold.
    BelowThreshold,
    /// `max_rounds` rounds ran with domains still pending.
    RoundBudgetExhausted,
    /// The run was cancelled from outside.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AllResolved => "all resolved",
            Self::BelowThreshold => "below success threshold",
            Self::RoundBudgetExhausted => "round budget exhausted",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Final partition of a batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub resolved: Vec<Arc<str>>,
    pub unresolved: Vec<Arc<str>>,
    pub rounds_executed: u32,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

impl BatchOutcome {
    /// Outcome for a run that had nothing to resolve.
    pub fn empty() -> Self {
        Self {
            resolved: Vec::new(),
            unresolved: Vec::new(),
            rounds_executed: 0,
            elapsed: Duration::ZERO,
            stop_reason: StopReason::AllResolved,
        }
    }

    pub fn total(&self) -> usize {
        self.resolved.len() + self.unresolved.len()
    }

    pub fn success_rate(&self) -> f64 {
        success_rate(self.resolved.len(), self.total())
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            total: self.total(),
            resolved: self.resolved.len(),
            unresolved: self.unresolved.len(),
            success_rate: self.success_rate(),
            rounds_executed: self.rounds_executed,
            elapsed_ms: self.elapsed.as_millis() as u64,
            stop_reason: self.stop_reason,
        }
    }
}

/// Serializable counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub success_rate: f64,
    pub rounds_executed: u32,
    pub elapsed_ms: u64,
    pub stop_reason: StopReason,
}

/// Percentage of `part` in `total`, 0 when `total` is 0.
pub fn success_rate(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_resolved_counts_as_success() {
        assert!(QueryOutcome::Resolved.is_resolved());
        for outcome in [
            QueryOutcome::NotFound,
            QueryOutcome::ServerFailure,
            QueryOutcome::Timeout,
            QueryOutcome::Error,
            QueryOutcome::Cancelled,
        ] {
            assert!(!outcome.is_resolved(), "{outcome} must not count as success");
        }
    }

    #[test]
    fn test_round_result_push_partitions() {
        let mut result = RoundResult::default();
        result.push(Arc::from("a.com"), QueryOutcome::Resolved);
        result.push(Arc::from("b.com"), QueryOutcome::Timeout);
        result.push(Arc::from("c.com"), QueryOutcome::NotFound);

        assert_eq!(result.resolved.len(), 1);
        assert_eq!(result.failed.len(), 2);
        assert_eq!(result.tally.timeout, 1);
        assert_eq!(result.tally.not_found, 1);
        assert_eq!(result.tally.total(), result.len());
    }

    #[test]
    fn test_absorb_merges_tallies() {
        let mut left = RoundResult::default();
        left.push(Arc::from("a.com"), QueryOutcome::Resolved);
        let mut right = RoundResult::default();
        right.push(Arc::from("b.com"), QueryOutcome::Error);

        left.absorb(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.tally.resolved, 1);
        assert_eq!(left.tally.error, 1);
    }

    #[test]
    fn test_success_rate_handles_zero_total() {
        assert_eq!(success_rate(0, 0), 0.0);
        assert_eq!(success_rate(1, 4), 25.0);
    }

    #[test]
    fn test_summary_carries_stop_reason() {
        let outcome = BatchOutcome {
            stop_reason: StopReason::BelowThreshold,
            ..BatchOutcome::empty()
        };
        let summary = outcome.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.stop_reason, StopReason::BelowThreshold);
    }
}
