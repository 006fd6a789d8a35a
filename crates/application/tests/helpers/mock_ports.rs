#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_sweep_application::ports::{
    ListSource, ProbeClient, ProbeClientFactory, ProgressObserver, ResultSink, RoundReport,
};
use ferrous_sweep_domain::{BatchOutcome, BatchSummary, DomainError, QueryOutcome, ResolverEndpoint};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock ProbeClientFactory
// ============================================================================

/// Decides the outcome of a query from (domain, endpoint, attempt number).
/// Attempts are counted per domain across all rounds, starting at 1.
pub type Script = Arc<dyn Fn(&str, &ResolverEndpoint, u32) -> QueryOutcome + Send + Sync>;

/// Domains for which a query never answers.
pub type Stall = Arc<dyn Fn(&str) -> bool + Send + Sync>;

struct ProbeState {
    script: Script,
    delay: Duration,
    stall: Option<Stall>,
    attempts: Mutex<HashMap<String, u32>>,
    queries: Mutex<Vec<(String, ResolverEndpoint)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    clients_created: AtomicUsize,
}

#[derive(Clone)]
pub struct MockProbeFactory {
    state: Arc<ProbeState>,
}

impl MockProbeFactory {
    pub fn scripted(script: Script) -> Self {
        Self {
            state: Arc::new(ProbeState {
                script,
                delay: Duration::ZERO,
                stall: None,
                attempts: Mutex::new(HashMap::new()),
                queries: Mutex::new(Vec::new()),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
                clients_created: AtomicUsize::new(0),
            }),
        }
    }

    pub fn always(outcome: QueryOutcome) -> Self {
        Self::scripted(Arc::new(move |_: &str, _: &ResolverEndpoint, _: u32| outcome))
    }

    /// Each domain resolves on the attempt returned by `attempt_for`;
    /// `None` means it never resolves.
    pub fn resolves_on_attempt<F>(attempt_for: F) -> Self
    where
        F: Fn(&str) -> Option<u32> + Send + Sync + 'static,
    {
        Self::scripted(Arc::new(move |domain: &str, _: &ResolverEndpoint, attempt: u32| {
            match attempt_for(domain) {
                Some(n) if attempt >= n => QueryOutcome::Resolved,
                _ => QueryOutcome::NotFound,
            }
        }))
    }

    /// Every query sleeps for `delay` before answering.
    pub fn with_delay(self, delay: Duration) -> Self {
        let state = Arc::try_unwrap(self.state)
            .unwrap_or_else(|_| panic!("with_delay must be called before sharing the factory"));
        Self {
            state: Arc::new(ProbeState { delay, ..state }),
        }
    }

    /// Queries for domains matching `stall` hang until they are dropped.
    pub fn with_stall<F>(self, stall: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let state = Arc::try_unwrap(self.state)
            .unwrap_or_else(|_| panic!("with_stall must be called before sharing the factory"));
        Self {
            state: Arc::new(ProbeState {
                stall: Some(Arc::new(stall)),
                ..state
            }),
        }
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn clients_created(&self) -> usize {
        self.state.clients_created.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, ResolverEndpoint)> {
        self.state.queries.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.state.queries.lock().unwrap().len()
    }
}

impl ProbeClientFactory for MockProbeFactory {
    fn client_for(&self, endpoint: &ResolverEndpoint) -> Arc<dyn ProbeClient> {
        self.state.clients_created.fetch_add(1, Ordering::SeqCst);
        Arc::new(MockProbeClient {
            endpoint: *endpoint,
            state: Arc::clone(&self.state),
        })
    }
}

struct MockProbeClient {
    endpoint: ResolverEndpoint,
    state: Arc<ProbeState>,
}

#[async_trait]
impl ProbeClient for MockProbeClient {
    async fn query_exists(&self, domain: &str) -> QueryOutcome {
        let now = self.state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let attempt = {
            let mut attempts = self.state.attempts.lock().unwrap();
            let entry = attempts.entry(domain.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };
        self.state
            .queries
            .lock()
            .unwrap()
            .push((domain.to_string(), self.endpoint));

        if !self.state.delay.is_zero() {
            tokio::time::sleep(self.state.delay).await;
        }
        if self.state.stall.as_ref().is_some_and(|stall| stall(domain)) {
            std::future::pending::<()>().await;
        }

        let outcome = (self.state.script)(domain, &self.endpoint, attempt);
        self.state.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}

// ============================================================================
// Mock ListSource
// ============================================================================

#[derive(Clone, Default)]
pub struct MockListSource {
    lists: Arc<Mutex<HashMap<String, Result<String, String>>>>,
}

impl MockListSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, location: &str, text: &str) -> Self {
        self.lists
            .lock()
            .unwrap()
            .insert(location.to_string(), Ok(text.to_string()));
        self
    }

    pub fn with_failure(self, location: &str, reason: &str) -> Self {
        self.lists
            .lock()
            .unwrap()
            .insert(location.to_string(), Err(reason.to_string()));
        self
    }
}

#[async_trait]
impl ListSource for MockListSource {
    async fn fetch(&self, location: &str) -> Result<String, DomainError> {
        match self.lists.lock().unwrap().get(location) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(DomainError::list_source(location, reason.clone())),
            None => Err(DomainError::list_source(location, "not found")),
        }
    }
}

// ============================================================================
// Mock ResultSink
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResultSink {
    persisted: Arc<Mutex<Vec<BatchOutcome>>>,
}

impl MockResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persisted(&self) -> Vec<BatchOutcome> {
        self.persisted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultSink for MockResultSink {
    async fn persist(&self, outcome: &BatchOutcome) -> Result<(), DomainError> {
        self.persisted.lock().unwrap().push(outcome.clone());
        Ok(())
    }
}

// ============================================================================
// Recording ProgressObserver
// ============================================================================

#[derive(Default)]
pub struct RecordingObserver {
    pub started: Mutex<Vec<(u32, usize, usize)>>,
    pub rounds: Mutex<Vec<RoundReport>>,
    pub below_threshold: Mutex<Vec<(u32, usize, usize)>>,
    pub summaries: Mutex<Vec<BatchSummary>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rounds(&self) -> Vec<RoundReport> {
        self.rounds.lock().unwrap().clone()
    }
}

impl ProgressObserver for RecordingObserver {
    fn round_started(&self, round: u32, domains: usize, endpoints: usize) {
        self.started.lock().unwrap().push((round, domains, endpoints));
    }

    fn round_completed(&self, report: &RoundReport) {
        self.rounds.lock().unwrap().push(*report);
    }

    fn below_threshold(&self, round: u32, resolved: usize, threshold: usize) {
        self.below_threshold
            .lock()
            .unwrap()
            .push((round, resolved, threshold));
    }

    fn batch_completed(&self, summary: &BatchSummary) {
        self.summaries.lock().unwrap().push(*summary);
    }
}
