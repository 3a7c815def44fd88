//! flapboard CLI: keeps a split-flap board snapshot in sync with a CSV feed.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use flapboard::{CliArgs, Config, SystemClock, cancel_on_shutdown, init_metrics, init_tracing, run_board};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (config, load_error) = Config::load_or_default(&args.config);
    init_tracing(&config.logging);

    match load_error {
        Some(e) if e.is_not_found() => {
            info!(path = %args.config.display(), "No config file, using defaults");
        }
        Some(e) => {
            warn!(path = %args.config.display(), error = %e, "Invalid config, using defaults");
        }
        None => {
            info!(path = %args.config.display(), "Loaded config");
        }
    }

    if config.metrics.enabled {
        let started = config
            .metrics
            .socket_addr()
            .map_err(|e| e.to_string())
            .and_then(|addr| init_metrics(addr).map_err(|e| e.to_string()));
        if let Err(e) = started {
            warn!(error = %e, "Metrics exporter unavailable, continuing without it");
        }
    }

    info!("Starting flapboard");

    let shutdown = cancel_on_shutdown(CancellationToken::new());
    let stats = run_board(&config, Arc::new(SystemClock), shutdown).await;

    info!(
        iterations = stats.iterations,
        failures = stats.failures,
        "flapboard stopped"
    );
    ExitCode::SUCCESS
}
