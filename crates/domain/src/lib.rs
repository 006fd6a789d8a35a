//! Ferrous Sweep Domain Layer
pub mod config;
pub mod domain_list;
pub mod endpoint;
pub mod errors;
pub mod filter;
pub mod outcome;

pub use config::{
    CliOverrides, Config, ConfigError, LoggingConfig, OutputConfig, ResolverConfig, SourcesConfig,
    DEFAULT_DOMAIN_LIST,
};
pub use domain_list::{normalize_line, parse_domain_list};
pub use endpoint::{EndpointSet, ResolverEndpoint, DEFAULT_DNS_SERVERS};
pub use errors::DomainError;
pub use filter::{FilterOutcome, FilterSet};
pub use outcome::{
    success_rate, BatchOutcome, BatchSummary, OutcomeTally, QueryOutcome, RoundResult,
    StopReason,
};
