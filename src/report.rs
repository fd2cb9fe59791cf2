//! Probe report output.
//!
//! Flattens the invocation parameters and the parsed statistics into one
//! JSON object. Absent measurements are written as `null`.

use std::io::Write;

use serde::Serialize;

use crate::parser::{Dialect, StatisticsRecord};
use crate::probe::ProbeConfig;

/// One probe run as written to the output stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub target: String,
    pub count: u32,
    /// Inter-packet interval in seconds; `null` in adaptive mode.
    pub interval: Option<f64>,
    pub binary: String,
    pub packets_sent: Option<u64>,
    pub packets_received: Option<u64>,
    pub packet_loss: Option<f64>,
    pub elapsed_ms: Option<u64>,
    pub rtt_minimum: Option<f64>,
    pub rtt_average: Option<f64>,
    pub rtt_maximum: Option<f64>,
    pub rtt_mdev: Option<f64>,
    #[serde(rename = "type")]
    pub dialect: Dialect,
}

impl ProbeReport {
    /// Combine a probe configuration with the statistics it produced.
    pub fn new(config: &ProbeConfig, record: &StatisticsRecord) -> Self {
        Self {
            target: config.target.clone(),
            count: config.settings.count,
            interval: config.interval().map(|d| d.as_secs_f64()),
            binary: config.settings.binary.clone(),
            packets_sent: record.packets_transmitted,
            packets_received: record.packets_received,
            packet_loss: record.packet_loss_percent,
            elapsed_ms: record.elapsed_ms,
            rtt_minimum: record.rtt_min,
            rtt_average: record.rtt_avg,
            rtt_maximum: record.rtt_max,
            rtt_mdev: record.rtt_mdev,
            dialect: record.dialect,
        }
    }

    /// Write the report as a single line of JSON, or indented if `pretty`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write_json<W: Write>(&self, mut out: W, pretty: bool) -> std::io::Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut out, self)?;
        } else {
            serde_json::to_writer(&mut out, self)?;
        }
        writeln!(out)?;
        out.flush()
    }
}
