//! Parser error types.
//!
//! Only two conditions abort a parse. Lines that fail their pattern are not
//! errors: the affected fields are left as `None` in the record.

use thiserror::Error;

/// Terminal failures of the report parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The report contains neither known summary signature.
    #[error("unrecognized ping output: no known summary signature found")]
    UnrecognizedDialect,

    /// The dialect was identified but the statistics header separating
    /// replies from the summary is missing.
    #[error("malformed ping report: separator {separator:?} not found")]
    MalformedReport {
        /// The separator that was expected.
        separator: String,
    },
}
