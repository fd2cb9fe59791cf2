//! Ping process runner.
//!
//! Spawns the configured ping binary, captures its output and hands it to
//! the parser.

use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use tokio::process::Command;
use tokio::time::timeout;

use crate::parser::{self, StatisticsRecord};

use super::config::ProbeConfig;
use super::error::ProbeError;

/// Captured output of one ping process.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
    /// Exit status of the process.
    pub status: ExitStatus,
    /// Wall time of the process in milliseconds.
    pub duration_ms: u64,
}

/// Runs ping against one target.
#[derive(Debug, Clone)]
pub struct PingProbe {
    config: ProbeConfig,
}

impl PingProbe {
    /// Create a probe, validating the configuration.
    ///
    /// # Errors
    /// Returns `ProbeError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        config.validate().map_err(ProbeError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Get the probe configuration.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Run ping and capture its output.
    ///
    /// A non-zero exit status is not an error: ping exits with 1 when some
    /// replies were lost, and its report is still complete.
    ///
    /// # Errors
    /// - `ProbeError::Spawn` if the binary cannot be started
    /// - `ProbeError::Timeout` if the process exceeds the configured timeout
    pub async fn capture(&self) -> Result<Capture, ProbeError> {
        let settings = &self.config.settings;
        let args = self.config.args();
        tracing::debug!(binary = %settings.binary, ?args, "Spawning ping");

        let child = Command::new(&settings.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let start = Instant::now();
        let output = timeout(settings.timeout, child)
            .await
            .map_err(|_| {
                tracing::warn!(
                    target_host = %self.config.target,
                    timeout_ms = settings.timeout.as_millis(),
                    "Ping timed out"
                );
                ProbeError::Timeout(settings.timeout)
            })?
            .map_err(|source| ProbeError::Spawn {
                binary: settings.binary.clone(),
                source,
            })?;
        let duration_ms = start.elapsed().as_millis().min(u64::MAX as u128) as u64;

        let capture = Capture {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status,
            duration_ms,
        };

        if !capture.status.success() {
            tracing::warn!(
                target_host = %self.config.target,
                status = %capture.status,
                stderr = capture.stderr.trim(),
                "Ping exited with failure status"
            );
        } else if !capture.stderr.is_empty() {
            tracing::debug!(stderr = capture.stderr.trim(), "Ping wrote to stderr");
        }

        Ok(capture)
    }

    /// Run ping and parse its report.
    ///
    /// # Errors
    /// Returns any capture error, or `ProbeError::Parse` if the report
    /// cannot be parsed.
    pub async fn run(&self) -> Result<StatisticsRecord, ProbeError> {
        let capture = self.capture().await?;

        let record = parser::parse(&capture.stdout, &self.config.target).inspect_err(|e| {
            tracing::error!(
                target_host = %self.config.target,
                error = %e,
                "Failed to parse ping output"
            );
        })?;

        tracing::info!(
            target_host = %self.config.target,
            dialect = %record.dialect,
            received = ?record.packets_received,
            loss = ?record.packet_loss_percent,
            rtt_avg = ?record.rtt_avg,
            duration_ms = capture.duration_ms,
            "Ping probe complete"
        );
        Ok(record)
    }
}
