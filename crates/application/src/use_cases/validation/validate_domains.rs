use super::load_domains::LoadDomainsUseCase;
use crate::ports::ResultSink;
use crate::services::BatchResolver;
use ferrous_sweep_domain::{BatchOutcome, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Load → resolve → persist, end to end.
pub struct ValidateDomainsUseCase {
    loader: LoadDomainsUseCase,
    resolver: Arc<BatchResolver>,
    sink: Arc<dyn ResultSink>,
}

impl ValidateDomainsUseCase {
    pub fn new(
        loader: LoadDomainsUseCase,
        resolver: Arc<BatchResolver>,
        sink: Arc<dyn ResultSink>,
    ) -> Self {
        Self {
            loader,
            resolver,
            sink,
        }
    }

    /// Only an unreachable primary list or a failing sink is an error. An
    /// empty list, or one emptied by the filters, yields an empty outcome
    /// without running any round.
    #[instrument(skip(self, filter_lists))]
    pub async fn execute(
        &self,
        domain_list: &str,
        filter_lists: &[String],
    ) -> Result<BatchOutcome, DomainError> {
        let loaded = self.loader.execute(domain_list, filter_lists).await?;

        let outcome = if loaded.domains.is_empty() {
            info!(
                total = loaded.total,
                filtered_out = loaded.filtered_out,
                "Nothing to resolve"
            );
            BatchOutcome::empty()
        } else {
            self.resolver.batch_resolve(loaded.domains).await
        };

        self.sink.persist(&outcome).await?;
        Ok(outcome)
    }
}
