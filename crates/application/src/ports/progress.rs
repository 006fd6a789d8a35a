use ferrous_sweep_domain::{success_rate, BatchSummary, OutcomeTally};

/// Counts for one finished round across all endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    pub round: u32,
    pub domains: usize,
    pub endpoints: usize,
    pub resolved: usize,
    pub failed: usize,
    pub tally: OutcomeTally,
}

impl RoundReport {
    pub fn success_rate(&self) -> f64 {
        success_rate(self.resolved, self.domains)
    }
}

/// Informational progress events. Observers never influence control flow.
pub trait ProgressObserver: Send + Sync {
    fn round_started(&self, _round: u32, _domains: usize, _endpoints: usize) {}

    fn round_completed(&self, _report: &RoundReport) {}

    /// A round resolved fewer domains than the early-termination threshold.
    fn below_threshold(&self, _round: u32, _resolved: usize, _threshold: usize) {}

    fn batch_completed(&self, _summary: &BatchSummary) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressObserver;

impl ProgressObserver for NoopProgressObserver {}
