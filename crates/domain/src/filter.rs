use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Domains left after removing filter-list entries.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub kept: Vec<Arc<str>>,
    pub removed: usize,
}

/// Union of all filter-list entries gathered for a run.
///
/// Membership is exact string equality on normalized entries; `ads.com`
/// does not cover `x.ads.com`.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: FxHashSet<Arc<str>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = Arc<str>>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps every domain not present in the set, preserving input order.
    pub fn apply(&self, domains: Vec<Arc<str>>) -> FilterOutcome {
        if self.entries.is_empty() {
            return FilterOutcome {
                kept: domains,
                removed: 0,
            };
        }
        let before = domains.len();
        let kept: Vec<Arc<str>> = domains
            .into_iter()
            .filter(|d| !self.entries.contains(d.as_ref()))
            .collect();
        FilterOutcome {
            removed: before - kept.len(),
            kept,
        }
    }
}

impl FromIterator<Arc<str>> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Arc<str>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
