use ferrous_sweep_application::ports::{ProgressObserver, RoundReport};
use ferrous_sweep_domain::BatchSummary;
use tracing::{info, warn};

/// Reports run progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressObserver;

impl ProgressObserver for TracingProgressObserver {
    fn round_started(&self, round: u32, domains: usize, endpoints: usize) {
        info!(round, domains, endpoints, "Round started");
    }

    fn round_completed(&self, report: &RoundReport) {
        info!(
            round = report.round,
            domains = report.domains,
            resolved = report.resolved,
            failed = report.failed,
            not_found = report.tally.not_found,
            server_failure = report.tally.server_failure,
            timeout = report.tally.timeout,
            error = report.tally.error,
            success_rate = %format!("{:.2}%", report.success_rate()),
            "Round completed"
        );
    }

    fn below_threshold(&self, round: u32, resolved: usize, threshold: usize) {
        warn!(
            round,
            resolved, threshold, "Round resolved too few domains, stopping retries"
        );
    }

    fn batch_completed(&self, summary: &BatchSummary) {
        info!(
            total = summary.total,
            resolved = summary.resolved,
            unresolved = summary.unresolved,
            rounds = summary.rounds_executed,
            elapsed_ms = summary.elapsed_ms,
            stop_reason = %summary.stop_reason,
            success_rate = %format!("{:.2}%", summary.success_rate),
            "Validation finished"
        );
    }
}
