//! Configuration module for Ferrous Sweep
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Endpoints, timeouts, concurrency and the retry policy
//! - `sources`: Where the domain list and filter lists come from
//! - `output`: Where results are written
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;
pub mod sources;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use sources::{SourcesConfig, DEFAULT_DOMAIN_LIST};
