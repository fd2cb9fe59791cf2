//! Ping probe runner.
//!
//! - [`ProbeConfig`]: target plus invocation settings, and the ping command line
//! - [`PingProbe`]: runs the ping binary and parses its report
//!
//! Command lines follow iputils/busybox option syntax:
//!
//! - interval mode: `ping -n -i <interval> -c <count> -W <reply_wait> <target>`
//! - adaptive mode: `ping -n -A -c <count> -w <deadline> <target>`

mod config;
mod error;
mod runner;

pub use config::{
    DEFAULT_BINARY, DEFAULT_COUNT, DEFAULT_DEADLINE, DEFAULT_INTERVAL, DEFAULT_REPLY_WAIT,
    DEFAULT_TIMEOUT, ProbeConfig, ProbeSettings,
};
pub use error::ProbeError;
pub use runner::{Capture, PingProbe};
