//! Splitting a report into reply lines and summary lines.

use super::dialect::DialectProfile;
use super::error::ParseError;

/// A report divided on the statistics header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Lines before the header (banner and per-packet replies).
    pub raw_lines: Vec<&'a str>,
    /// Lines after the header.
    pub summary_lines: Vec<&'a str>,
}

/// Split `raw` on the first occurrence of the profile's separator.
///
/// # Errors
/// Returns [`ParseError::MalformedReport`] if the separator is absent.
pub fn split<'a>(raw: &'a str, profile: &DialectProfile) -> Result<Sections<'a>, ParseError> {
    let (replies, summary) = raw
        .split_once(profile.separator())
        .ok_or_else(|| ParseError::MalformedReport {
            separator: profile.separator().to_string(),
        })?;

    Ok(Sections {
        raw_lines: replies.split('\n').collect(),
        summary_lines: summary.split('\n').collect(),
    })
}
