//! # Ferrous Sweep
//!
//! Validates a large list of domain names by asking many public resolvers
//! whether each one resolves, retrying failures in shuffled rounds.

mod bootstrap;
mod di;

use bootstrap::{init_logging, load_config, log_config};
use clap::Parser;
use di::UseCases;
use ferrous_sweep_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "ferrous-sweep")]
#[command(version)]
#[command(about = "Concurrent multi-resolver DNS validation of large domain lists")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Domain list to validate (URL or local path; defaults to the anti-AD list)
    #[arg(short = 'd', long)]
    domains: Option<String>,

    /// Filter list whose entries are removed before resolving (repeatable)
    #[arg(short = 'f', long = "filter")]
    filters: Vec<String>,

    /// Resolver endpoint as IP or IP:port (repeatable)
    #[arg(short = 's', long = "dns-server")]
    dns_servers: Vec<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Maximum in-flight queries per resolver
    #[arg(long)]
    concurrency: Option<usize>,

    /// Upper bound on the number of rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Seed for reproducible shuffling and resolver assignment
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for resolvable domains
    #[arg(long)]
    output_resolved: Option<String>,

    /// Output file for unresolved domains
    #[arg(long)]
    output_unresolved: Option<String>,

    /// Optional JSON summary file
    #[arg(long)]
    summary: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            domain_list: self.domains.clone(),
            filter_lists: self.filters.clone(),
            dns_servers: self.dns_servers.clone(),
            timeout_ms: self.timeout_ms,
            concurrency_per_group: self.concurrency,
            max_rounds: self.max_rounds,
            shuffle_seed: self.seed,
            resolved_path: self.output_resolved.clone(),
            unresolved_path: self.output_unresolved.clone(),
            summary_path: self.summary.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config);
    log_config(&config, cli.config.as_deref());

    let domain_list = config.sources.domain_list.clone();

    let cancel = CancellationToken::new();
    let use_cases = UseCases::new(&config, cancel.clone())?;

    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupt received, cancelling in-flight queries");
                ctrl_c_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });

    info!(
        domain_list = %domain_list,
        filters = config.sources.filter_lists.len(),
        "Starting validation"
    );

    let outcome = use_cases
        .validate_domains
        .execute(&domain_list, &config.sources.filter_lists)
        .await?;

    info!(
        resolved = outcome.resolved.len(),
        unresolved = outcome.unresolved.len(),
        rounds = outcome.rounds_executed,
        stop_reason = %outcome.stop_reason,
        success_rate = %format!("{:.2}%", outcome.success_rate()),
        "Done"
    );

    Ok(())
}
