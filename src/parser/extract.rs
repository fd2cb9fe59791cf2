//! Summary field extraction.
//!
//! The first summary line carries packet counts, the second the RTT
//! figures. Each line is read all-or-nothing: if it does not match, or a
//! captured number does not parse, the whole group is left absent.

use std::str::FromStr;

use regex::Captures;

use super::dialect::DialectProfile;
use super::record::StatisticsRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PacketCounts {
    transmitted: u64,
    received: u64,
    loss_percent: f64,
    elapsed_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct RttFigures {
    min: f64,
    avg: f64,
    max: f64,
    mdev: Option<f64>,
}

/// Extract summary fields into a partial record.
///
/// `rtt_mdev` is only filled here for dialects that print it; see
/// [`reconcile_mdev`](super::reconcile_mdev) for the others.
pub fn extract(summary_lines: &[&str], profile: &DialectProfile) -> StatisticsRecord {
    let mut record = StatisticsRecord::empty(profile.dialect());

    if let Some(counts) = summary_lines
        .first()
        .and_then(|line| packet_counts(line, profile))
    {
        record.packets_transmitted = Some(counts.transmitted);
        record.packets_received = Some(counts.received);
        record.packet_loss_percent = Some(counts.loss_percent);
        record.elapsed_ms = counts.elapsed_ms;
    } else {
        tracing::debug!(dialect = %profile.dialect(), "Packet summary line not reported");
    }

    if let Some(rtt) = summary_lines
        .get(1)
        .and_then(|line| rtt_figures(line, profile))
    {
        record.rtt_min = Some(rtt.min);
        record.rtt_avg = Some(rtt.avg);
        record.rtt_max = Some(rtt.max);
        record.rtt_mdev = rtt.mdev;
    } else {
        tracing::debug!(dialect = %profile.dialect(), "RTT summary line not reported");
    }

    record
}

fn packet_counts(line: &str, profile: &DialectProfile) -> Option<PacketCounts> {
    let caps = profile.patterns().packets.captures(line)?;

    let counts = PacketCounts {
        transmitted: required(&caps, "transmitted", line)?,
        received: required(&caps, "received", line)?,
        loss_percent: required(&caps, "loss", line)?,
        elapsed_ms: if profile.reports_elapsed() {
            optional(&caps, "elapsed", line)?
        } else {
            None
        },
    };

    if counts.received > counts.transmitted {
        tracing::warn!(
            line,
            transmitted = counts.transmitted,
            received = counts.received,
            "Discarding packet summary with more replies than requests"
        );
        return None;
    }

    Some(counts)
}

fn rtt_figures(line: &str, profile: &DialectProfile) -> Option<RttFigures> {
    let caps = profile.patterns().rtt.captures(line)?;

    let rtt = RttFigures {
        min: required(&caps, "min", line)?,
        avg: required(&caps, "avg", line)?,
        max: required(&caps, "max", line)?,
        mdev: optional(&caps, "mdev", line)?,
    };

    if !(rtt.min <= rtt.avg && rtt.avg <= rtt.max) {
        tracing::warn!(
            line,
            min = rtt.min,
            avg = rtt.avg,
            max = rtt.max,
            "Discarding RTT summary with inconsistent min/avg/max"
        );
        return None;
    }

    Some(rtt)
}

/// Parse a capture group that every match of the pattern has.
fn required<T: FromStr>(caps: &Captures<'_>, name: &str, line: &str) -> Option<T> {
    optional(caps, name, line).flatten()
}

/// Parse a capture group the pattern may not define.
///
/// Returns `Some(None)` when the group is absent and `None` when it is
/// present but not a valid number.
fn optional<T: FromStr>(caps: &Captures<'_>, name: &str, line: &str) -> Option<Option<T>> {
    let Some(m) = caps.name(name) else {
        return Some(None);
    };

    match m.as_str().parse() {
        Ok(value) => Some(Some(value)),
        Err(_) => {
            tracing::warn!(line, field = name, value = m.as_str(), "Unparseable number");
            None
        }
    }
}
