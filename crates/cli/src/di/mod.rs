use ferrous_sweep_application::ports::ProgressObserver;
use ferrous_sweep_application::services::{
    BatchResolver, GroupResolver, RetryPolicy, RoundOrchestrator,
};
use ferrous_sweep_application::use_cases::{LoadDomainsUseCase, ValidateDomainsUseCase};
use ferrous_sweep_domain::{Config, DomainError};
use ferrous_sweep_infrastructure::dns::DnsProbeFactory;
use ferrous_sweep_infrastructure::output::FileResultSink;
use ferrous_sweep_infrastructure::progress::TracingProgressObserver;
use ferrous_sweep_infrastructure::sources::DefaultListSource;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Wires the adapters into the validation use case.
pub struct UseCases {
    pub validate_domains: ValidateDomainsUseCase,
}

impl UseCases {
    pub fn new(config: &Config, cancel: CancellationToken) -> Result<Self, DomainError> {
        let observer: Arc<dyn ProgressObserver> = Arc::new(TracingProgressObserver);

        let factory = Arc::new(DnsProbeFactory::new(config.resolver.timeout()));
        let group_resolver =
            GroupResolver::new(factory).with_concurrency(config.resolver.concurrency_per_group);

        let mut orchestrator =
            RoundOrchestrator::new(config.resolver.endpoints()?, group_resolver)
                .with_observer(Arc::clone(&observer));
        if let Some(seed) = config.resolver.shuffle_seed {
            orchestrator = orchestrator.with_seed(seed);
        }

        let resolver = BatchResolver::new(orchestrator)
            .with_policy(RetryPolicy {
                max_rounds: config.resolver.max_rounds,
                min_success_threshold: config.resolver.min_success_threshold,
            })
            .with_observer(observer)
            .with_cancellation(cancel);

        let source = DefaultListSource::new(Duration::from_secs(
            config.sources.fetch_timeout_secs,
        ))?;
        let sink = FileResultSink::from_config(&config.output);

        Ok(Self {
            validate_domains: ValidateDomainsUseCase::new(
                LoadDomainsUseCase::new(Arc::new(source)),
                Arc::new(resolver),
                Arc::new(sink),
            ),
        })
    }
}
