use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use eldsync_core::{
    detect_conflicts, filter_by_status, normalize_batch, BlockingEldClient, EldBatch, EldClient,
    EldConfig,
};

mod export;
mod logging;

#[derive(Parser)]
#[command(
    name = "eldsync",
    about = "Export ELD driver/vehicle telemetry by duty status or vehicle conflicts"
)]
struct Cli {
    /// TOML config file with api_base_url / api_key
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the blocking fetcher (for single-threaded hosts)
    #[arg(long, global = true)]
    blocking: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export drivers whose current duty status matches exactly
    Status {
        /// Duty status to match, e.g. "Driving", "Off Duty", "On Duty", "SB"
        status: String,

        #[arg(long, default_value = "eld_status.xlsx")]
        output: PathBuf,
    },
    /// Export drivers whose vehicle is shared by more than one driver
    Conflicts {
        #[arg(long, default_value = "vehicle_conflicts.xlsx")]
        output: PathBuf,
    },
}

/// One fetch, on whichever transport the caller picked. The blocking
/// client must not run inside a Tokio runtime, so the runtime is only
/// built for the async path.
fn fetch_batch(config: &EldConfig, blocking: bool) -> Result<EldBatch> {
    if blocking {
        let client = BlockingEldClient::new(config)?;
        Ok(client.fetch_drivers()?)
    } else {
        let runtime = tokio::runtime::Runtime::new().context("Failed to build Tokio runtime")?;
        let client = EldClient::new(config)?;
        Ok(runtime.block_on(client.fetch_drivers())?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logging_guard = logging::init_logging("logs", "eldsync", &cli.log_level);

    let config = EldConfig::load(cli.config.as_deref())?;

    tracing::info!("Fetching driver telemetry from {}", config.api_base_url);
    let batch = fetch_batch(&config, cli.blocking)?;
    tracing::info!(
        "Fetched {} raw entries at {}",
        batch.entries.len(),
        batch.fetched_at
    );

    match cli.command {
        Command::Status { status, output } => {
            let matched = filter_by_status(&batch.entries, &status);
            if matched.is_empty() {
                tracing::warn!("No drivers found with {} status", status);
            } else {
                tracing::info!("Found {} drivers with {} status", matched.len(), status);
            }
            export::write_status_report(&matched, &output)?;
            tracing::info!("Report written to {}", output.display());
        }
        Command::Conflicts { output } => {
            let records = normalize_batch(&batch.entries);
            let conflicts = detect_conflicts(&records);
            if conflicts.is_empty() {
                tracing::warn!("No vehicle assignment conflicts found");
            } else {
                tracing::info!(
                    "Found {} drivers on shared vehicles ({} records checked)",
                    conflicts.len(),
                    records.len()
                );
            }
            export::write_conflict_report(&conflicts, &output)?;
            tracing::info!("Report written to {}", output.display());
        }
    }

    Ok(())
}
