use crate::ports::ListSource;
use ferrous_sweep_domain::{parse_domain_list, DomainError, FilterSet};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Domains ready for resolution, after filter lists have been applied.
#[derive(Debug, Clone, Default)]
pub struct LoadedDomains {
    pub domains: Vec<Arc<str>>,
    /// Entries parsed from the primary list, before filtering
    pub total: usize,
    /// Entries removed because a filter list contains them
    pub filtered_out: usize,
    /// Distinct entries gathered from all filter lists that could be fetched
    pub filter_entries: usize,
}

pub struct LoadDomainsUseCase {
    source: Arc<dyn ListSource>,
}

impl LoadDomainsUseCase {
    pub fn new(source: Arc<dyn ListSource>) -> Self {
        Self { source }
    }

    /// Fetches and parses the primary list, then removes every entry found in
    /// any filter list.
    ///
    /// A failing primary list aborts the run. A failing filter list is logged
    /// and contributes no entries.
    #[instrument(skip(self, filter_lists), fields(filter_lists = filter_lists.len()))]
    pub async fn execute(
        &self,
        domain_list: &str,
        filter_lists: &[String],
    ) -> Result<LoadedDomains, DomainError> {
        let text = self.source.fetch(domain_list).await?;
        let domains = parse_domain_list(&text);
        let total = domains.len();
        info!(source = %domain_list, domains = total, "Domain list loaded");

        if domains.is_empty() || filter_lists.is_empty() {
            return Ok(LoadedDomains {
                domains,
                total,
                filtered_out: 0,
                filter_entries: 0,
            });
        }

        let filter = self.load_filter(filter_lists).await;
        let outcome = filter.apply(domains);
        info!(
            filter_entries = filter.len(),
            filtered_out = outcome.removed,
            remaining = outcome.kept.len(),
            "Filter lists applied"
        );

        Ok(LoadedDomains {
            domains: outcome.kept,
            total,
            filtered_out: outcome.removed,
            filter_entries: filter.len(),
        })
    }

    async fn load_filter(&self, filter_lists: &[String]) -> FilterSet {
        let fetches = filter_lists.iter().map(|location| async move {
            (location, self.source.fetch(location).await)
        });

        let mut filter = FilterSet::new();
        for (location, fetched) in join_all(fetches).await {
            match fetched {
                Ok(text) => {
                    let entries = parse_domain_list(&text);
                    info!(source = %location, entries = entries.len(), "Filter list loaded");
                    filter.extend(entries);
                }
                Err(e) => {
                    warn!(source = %location, error = %e, "Filter list unavailable, skipping");
                }
            }
        }
        filter
    }
}
