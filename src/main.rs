//! pingstat Binary Entry Point
//!
//! Runs one ping probe and prints its statistics as JSON on stdout.
//! Logs go to stderr.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pingstat::{
    AppConfig, PingProbe, ProbeConfig, ProbeReport,
    config::{parse_duration, parse_interval_secs},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Perform a ping test and report on results
#[derive(Parser, Debug)]
#[command(name = "pingstat", version, about, long_about = None)]
struct Cli {
    /// The IP address or hostname to ping
    target: String,

    /// Number of ping packets to send [default: 50]
    #[arg(short, long, env = "PINGSTAT_COUNT")]
    count: Option<u32>,

    /// Inter-packet interval in seconds, 0 for adaptive mode [default: 0.2]
    #[arg(short, long, env = "PINGSTAT_INTERVAL")]
    interval: Option<String>,

    /// Path to the ping binary [default: /bin/ping]
    #[arg(short = 'b', long = "path", env = "PINGSTAT_BINARY")]
    binary: Option<String>,

    /// Overall time limit for the ping process, e.g. "30s" [default: 60s]
    #[arg(short, long, env = "PINGSTAT_TIMEOUT", value_parser = parse_duration)]
    timeout: Option<Duration>,

    /// Path to a YAML configuration file with probe defaults
    #[arg(long, env = "PINGSTAT_CONFIG")]
    config: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,pingstat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Probe failed");
            eprintln!("pingstat: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_probe_config(&cli)?;
    tracing::debug!(?config, "Resolved probe configuration");

    let probe = PingProbe::new(config)?;
    let record = probe.run().await?;

    ProbeReport::new(probe.config(), &record).write_json(std::io::stdout().lock(), cli.pretty)?;
    Ok(())
}

/// Merge config file settings with CLI/env overrides (CLI > ENV > file > defaults).
fn build_probe_config(cli: &Cli) -> Result<ProbeConfig, Box<dyn std::error::Error>> {
    let app = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            AppConfig::load(path)?
        }
        None => AppConfig::default(),
    };

    let mut settings = app.probe;
    if let Some(count) = cli.count {
        settings.count = count;
    }
    if let Some(ref interval) = cli.interval {
        settings.interval = parse_interval_secs(interval)?;
    }
    if let Some(ref binary) = cli.binary {
        settings.binary = binary.clone();
    }
    if let Some(timeout) = cli.timeout {
        settings.timeout = timeout;
    }

    Ok(ProbeConfig::new(&cli.target).with_settings(settings))
}
