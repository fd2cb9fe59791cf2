//! Configuration module for pingstat.
//!
//! Provides YAML-based configuration loading and validation for the
//! default probe settings (binary, count, interval, timeouts).

mod app;
mod validation;

pub use app::AppConfig;
pub use validation::{ConfigError, expand_env_vars, parse_duration, parse_interval_secs};
