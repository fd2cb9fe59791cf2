//! Ping Report Parser
//!
//! Turns the captured text of one `ping` run into a [`StatisticsRecord`].
//!
//! # Pipeline
//!
//! 1. [`detect`]: identify the [`Dialect`] from its summary signature
//! 2. [`profile_for`]: select the dialect's patterns and separator
//! 3. [`split`]: divide the report into reply lines and summary lines
//! 4. [`extract`]: read packet counts and RTT figures from the summary
//! 5. [`reconcile_mdev`]: compute the RTT deviation from replies when the
//!    dialect does not print it
//!
//! Unknown dialects and missing separators abort the parse with a
//! [`ParseError`]. Summary lines that do not match only leave the
//! corresponding fields as `None`.
//!
//! # Example
//!
//! ```
//! use pingstat::parser::{Dialect, parse};
//!
//! let raw = "PING 10.0.0.1 (10.0.0.1) 56(84) bytes of data.\n\
//!            64 bytes from 10.0.0.1: icmp_seq=1 ttl=64 time=0.045 ms\n\
//!            \n\
//!            --- 10.0.0.1 ping statistics ---\n\
//!            1 packets transmitted, 1 received, 0% packet loss, time 0ms\n\
//!            rtt min/avg/max/mdev = 0.045/0.045/0.045/0.000 ms\n";
//!
//! let record = parse(raw, "10.0.0.1").unwrap();
//! assert_eq!(record.dialect, Dialect::Linux);
//! assert_eq!(record.packets_received, Some(1));
//! assert_eq!(record.rtt_mdev, Some(0.0));
//! ```

mod dialect;
mod error;
mod extract;
mod jitter;
mod record;
mod split;

pub use dialect::{Dialect, DialectProfile, PatternSet, detect, profile_for};
pub use error::ParseError;
pub use extract::extract;
pub use jitter::{collect_samples, population_mdev, reconcile_mdev};
pub use record::StatisticsRecord;
pub use split::{Sections, split};

/// Parse the complete output of one ping run against `target`.
///
/// `target` must be the exact string passed to ping, since the report
/// echoes it in its statistics header.
///
/// # Errors
/// - [`ParseError::UnrecognizedDialect`] if no known summary signature is present
/// - [`ParseError::MalformedReport`] if the statistics header is missing
pub fn parse(raw: &str, target: &str) -> Result<StatisticsRecord, ParseError> {
    let dialect = detect(raw);
    let profile = profile_for(dialect, target).ok_or(ParseError::UnrecognizedDialect)?;
    tracing::debug!(%dialect, host = target, "Identified ping dialect");

    let sections = split(raw, &profile)?;
    let record = extract(&sections.summary_lines, &profile);
    let record = reconcile_mdev(record, &sections.raw_lines, &profile);

    tracing::debug!(
        %dialect,
        host = target,
        transmitted = ?record.packets_transmitted,
        received = ?record.packets_received,
        rtt_avg = ?record.rtt_avg,
        "Parsed ping report"
    );
    Ok(record)
}
