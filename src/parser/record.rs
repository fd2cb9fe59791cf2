//! Parsed ping statistics.

use serde::{Deserialize, Serialize};

use super::dialect::Dialect;

/// Statistics of one ping run.
///
/// Every measurement is optional: `None` means the run did not report the
/// value (or the line could not be read), which is distinct from a reported
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    /// Dialect the report was written in.
    pub dialect: Dialect,
    /// Number of echo requests sent.
    pub packets_transmitted: Option<u64>,
    /// Number of echo replies received.
    pub packets_received: Option<u64>,
    /// Percentage of requests without a reply.
    pub packet_loss_percent: Option<f64>,
    /// Wall time of the run in milliseconds.
    pub elapsed_ms: Option<u64>,
    /// Minimum round-trip time (ms).
    pub rtt_min: Option<f64>,
    /// Average round-trip time (ms).
    pub rtt_avg: Option<f64>,
    /// Maximum round-trip time (ms).
    pub rtt_max: Option<f64>,
    /// Standard deviation of round-trip times (ms).
    pub rtt_mdev: Option<f64>,
}

impl StatisticsRecord {
    /// Create a record for `dialect` with every measurement absent.
    pub fn empty(dialect: Dialect) -> Self {
        Self {
            dialect,
            packets_transmitted: None,
            packets_received: None,
            packet_loss_percent: None,
            elapsed_ms: None,
            rtt_min: None,
            rtt_avg: None,
            rtt_max: None,
            rtt_mdev: None,
        }
    }

    /// Whether at least one reply was received.
    pub fn is_reachable(&self) -> bool {
        self.packets_received.is_some_and(|n| n > 0)
    }
}
