//! pingstat - ping report parsing library
//!
//! Runs the system `ping` binary against a target and turns its textual
//! report into structured statistics: packet loss and RTT
//! min/avg/max/mdev. It can be used as a library, or through the
//! `pingstat` binary which prints one JSON object per run.
//!
//! # Architecture
//!
//! - **Parser**: dialect detection and field extraction for iputils and
//!   busybox reports, with RTT deviation recomputed from replies when the
//!   dialect does not print it
//! - **Probe**: ping command line construction and process execution
//! - **Report**: flat JSON output of parameters and statistics
//! - **Config**: YAML defaults for probe settings
//!
//! # Example
//!
//! ```rust,no_run
//! use pingstat::{PingProbe, ProbeConfig, ProbeReport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig::new("192.0.2.1").with_count(10);
//! let probe = PingProbe::new(config)?;
//! let record = probe.run().await?;
//! ProbeReport::new(probe.config(), &record).write_json(std::io::stdout(), false)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod parser;
pub mod probe;
pub mod report;

pub use config::{AppConfig, ConfigError};
pub use parser::{Dialect, ParseError, StatisticsRecord, parse};
pub use probe::{PingProbe, ProbeConfig, ProbeError, ProbeSettings};
pub use report::ProbeReport;
