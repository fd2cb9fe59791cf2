//! RTT standard deviation from per-packet samples.
//!
//! Used for dialects whose summary stops at min/avg/max.

use super::dialect::DialectProfile;
use super::record::StatisticsRecord;

/// Decimal places of the computed deviation, matching what iputils prints.
const MDEV_PRECISION: i32 = 3;

/// Fill `rtt_mdev` from the reply lines when the dialect does not report it.
///
/// Profiles that report mdev natively keep the extracted value untouched.
pub fn reconcile_mdev(
    record: StatisticsRecord,
    raw_lines: &[&str],
    profile: &DialectProfile,
) -> StatisticsRecord {
    if profile.reports_mdev() {
        return record;
    }

    let samples = collect_samples(raw_lines, profile);
    let rtt_mdev = population_mdev(&samples);
    tracing::debug!(
        dialect = %profile.dialect(),
        samples = samples.len(),
        ?rtt_mdev,
        "Computed RTT deviation from replies"
    );

    StatisticsRecord { rtt_mdev, ..record }
}

/// RTT values (ms) of every reply line matching the per-packet pattern.
pub fn collect_samples(raw_lines: &[&str], profile: &DialectProfile) -> Vec<f64> {
    let pattern = &profile.patterns().per_packet;

    raw_lines
        .iter()
        .filter_map(|line| pattern.captures(line))
        .filter_map(|caps| caps.name("rtt")?.as_str().parse().ok())
        .collect()
}

/// Population standard deviation, rounded to three decimals.
///
/// Returns `None` for an empty sample set.
pub fn population_mdev(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;

    Some(round_to(variance.sqrt(), MDEV_PRECISION))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
