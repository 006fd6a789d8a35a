use ferrous_sweep_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is up, since the log level itself comes from
/// the loaded configuration.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        dns_servers = config.resolver.dns_servers.len(),
        timeout_ms = config.resolver.timeout_ms,
        concurrency_per_group = config.resolver.concurrency_per_group,
        max_rounds = ?config.resolver.max_rounds,
        min_success_threshold = config.resolver.min_success_threshold,
        "Configuration loaded"
    );
}
