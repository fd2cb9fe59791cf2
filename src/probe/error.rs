//! Probe error types.

use std::time::Duration;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that can occur while running a probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The ping binary could not be started.
    #[error("failed to run ping binary '{binary}': {source}")]
    Spawn {
        /// Binary that failed to start.
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The ping process did not finish in time.
    #[error("ping did not finish within {0:?}")]
    Timeout(Duration),

    /// Invalid probe configuration.
    #[error("invalid probe config: {0}")]
    InvalidConfig(String),

    /// The captured output could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
