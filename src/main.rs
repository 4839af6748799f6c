//! uptrack: availability monitor for tracked web resources.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use uptrack::config::{load_config, MonitorConfig};
use uptrack::events::{EventLog, FileEventLog};
use uptrack::lifecycle::Shutdown;
use uptrack::monitor::{Monitor, ProbeClient, ProbeOutcome};
use uptrack::observability::{logging, metrics};
use uptrack::store::{MemoryStore, SourceStore};

#[derive(Parser)]
#[command(name = "uptrack")]
#[command(about = "Availability monitor for tracked web resources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the monitoring loop
    Run {
        #[arg(short, long, default_value = "uptrack.toml")]
        config: PathBuf,
    },
    /// Probe a single URL once and print the outcome
    Check {
        url: String,

        #[arg(long, default_value_t = 3)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => run_monitor(&config).await,
        Commands::Check { url, timeout_secs } => check_once(&url, timeout_secs).await,
    }
}

async fn run_monitor(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    logging::init(&config.observability.log_level);
    tracing::info!(
        config = %config_path.display(),
        check_period_secs = config.check.check_period_secs,
        failure_threshold = config.check.failure_threshold,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = build_store(&config)?;
    tracing::info!(sources = store.len(), "Source store ready");

    let events = Arc::new(FileEventLog::new(
        &config.event_log.path,
        config.event_log.max_bytes,
    )?);

    let probe = ProbeClient::new(Duration::from_secs(config.check.probe_timeout_secs))?;

    let monitor = Monitor::new(
        Arc::new(store) as Arc<dyn SourceStore>,
        events as Arc<dyn EventLog>,
        probe,
        config.check.clone(),
    );

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(monitor.run(monitor_shutdown));

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
    handle.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_store(config: &MonitorConfig) -> Result<MemoryStore, Box<dyn std::error::Error>> {
    match &config.store.snapshot_path {
        Some(path) => Ok(MemoryStore::load_from_file(Path::new(path))?),
        None => Ok(MemoryStore::new(None)),
    }
}

async fn check_once(url: &str, timeout_secs: u64) -> Result<(), Box<dyn std::error::Error>> {
    let probe = ProbeClient::new(Duration::from_secs(timeout_secs))?;
    let outcome = probe.probe(url).await;

    match &outcome {
        ProbeOutcome::StatusCode(code) => println!("{} -> HTTP {}", url, code),
        ProbeOutcome::TimedOut => println!("{} -> timed out after {}s", url, timeout_secs),
        ProbeOutcome::ConnectionFailed => println!("{} -> connection failed", url),
        ProbeOutcome::OtherError(detail) => println!("{} -> error: {}", url, detail),
    }

    if !outcome.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
