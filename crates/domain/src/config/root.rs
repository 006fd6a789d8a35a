use super::{ConfigError, LoggingConfig, OutputConfig, ResolverConfig, SourcesConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration, loaded from TOML with every section optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub domain_list: Option<String>,
    pub filter_lists: Vec<String>,
    pub dns_servers: Vec<String>,
    pub timeout_ms: Option<u64>,
    pub concurrency_per_group: Option<usize>,
    pub max_rounds: Option<u32>,
    pub shuffle_seed: Option<u64>,
    pub resolved_path: Option<String>,
    pub unresolved_path: Option<String>,
    pub summary_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path` (defaults when `None`) and applies CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(list) = overrides.domain_list {
            self.sources.domain_list = list;
        }
        if !overrides.filter_lists.is_empty() {
            self.sources.filter_lists = overrides.filter_lists;
        }
        if !overrides.dns_servers.is_empty() {
            self.resolver.dns_servers = overrides.dns_servers;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout_ms;
        }
        if let Some(concurrency) = overrides.concurrency_per_group {
            self.resolver.concurrency_per_group = concurrency;
        }
        if let Some(max_rounds) = overrides.max_rounds {
            self.resolver.max_rounds = Some(max_rounds);
        }
        if let Some(seed) = overrides.shuffle_seed {
            self.resolver.shuffle_seed = Some(seed);
        }
        if let Some(path) = overrides.resolved_path {
            self.output.resolved_path = path;
        }
        if let Some(path) = overrides.unresolved_path {
            self.output.unresolved_path = path;
        }
        if let Some(path) = overrides.summary_path {
            self.output.summary_path = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver
            .endpoints()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.resolver.concurrency_per_group == 0 {
            return Err(ConfigError::Validation(
                "resolver.concurrency_per_group must be greater than 0".to_string(),
            ));
        }
        if self.resolver.max_rounds == Some(0) {
            return Err(ConfigError::Validation(
                "resolver.max_rounds must be at least 1 when set".to_string(),
            ));
        }
        if self.sources.domain_list.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sources.domain_list must not be empty".to_string(),
            ));
        }
        if self.sources.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "sources.fetch_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
