use async_trait::async_trait;
use ferrous_sweep_domain::{BatchOutcome, DomainError};

/// Receives the final resolved/unresolved partition of a run.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn persist(&self, outcome: &BatchOutcome) -> Result<(), DomainError>;
}
