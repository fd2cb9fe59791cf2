//! Probe invocation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default ping binary.
pub const DEFAULT_BINARY: &str = "/bin/ping";

/// Default number of echo requests.
pub const DEFAULT_COUNT: u32 = 50;

/// Default inter-packet interval (200 milliseconds).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Default per-reply wait in interval mode (1 second).
pub const DEFAULT_REPLY_WAIT: Duration = Duration::from_secs(1);

/// Default run deadline in adaptive mode (2 seconds).
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Default limit on the whole ping process (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

fn default_interval() -> Option<Duration> {
    Some(DEFAULT_INTERVAL)
}

fn default_reply_wait() -> Duration {
    DEFAULT_REPLY_WAIT
}

fn default_deadline() -> Duration {
    DEFAULT_DEADLINE
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

/// Settings for one ping run, minus the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Path to the ping binary (default: "/bin/ping").
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Number of echo requests (default: 50).
    #[serde(default = "default_count")]
    pub count: u32,
    /// Inter-packet interval (default: 200ms). `None` or zero selects
    /// adaptive mode.
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Option<Duration>,
    /// Time to wait for each reply in interval mode (default: 1s).
    #[serde(default = "default_reply_wait", with = "humantime_serde")]
    pub reply_wait: Duration,
    /// Deadline for the whole run in adaptive mode (default: 2s).
    #[serde(default = "default_deadline", with = "humantime_serde")]
    pub deadline: Duration,
    /// Hard limit on the ping process (default: 60s).
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            count: DEFAULT_COUNT,
            interval: Some(DEFAULT_INTERVAL),
            reply_wait: DEFAULT_REPLY_WAIT,
            deadline: DEFAULT_DEADLINE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Configuration for a single ping probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Target host, passed to ping verbatim.
    pub target: String,
    /// Invocation settings.
    #[serde(flatten)]
    pub settings: ProbeSettings,
}

impl ProbeConfig {
    /// Create a probe configuration with default settings.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            settings: ProbeSettings::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.target.trim().is_empty() {
            return Err("target cannot be empty".to_string());
        }
        if self.target.starts_with('-') {
            return Err(format!("target '{}' looks like an option", self.target));
        }
        self.settings.validate()
    }

    /// Effective inter-packet interval; `None` means adaptive mode.
    pub fn interval(&self) -> Option<Duration> {
        self.settings.interval.filter(|d| !d.is_zero())
    }

    /// Command-line arguments passed to the ping binary.
    pub fn args(&self) -> Vec<String> {
        let s = &self.settings;
        let mut args = vec!["-n".to_string()];

        match self.interval() {
            Some(interval) => {
                args.extend([
                    "-i".to_string(),
                    interval.as_secs_f64().to_string(),
                    "-c".to_string(),
                    s.count.to_string(),
                    "-W".to_string(),
                    s.reply_wait.as_secs().to_string(),
                ]);
            }
            None => {
                args.extend([
                    "-A".to_string(),
                    "-c".to_string(),
                    s.count.to_string(),
                    "-w".to_string(),
                    s.deadline.as_secs().to_string(),
                ]);
            }
        }

        args.push(self.target.clone());
        args
    }

    /// Set the ping binary path.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.settings.binary = binary.into();
        self
    }

    /// Set the number of echo requests.
    pub fn with_count(mut self, count: u32) -> Self {
        self.settings.count = count;
        self
    }

    /// Set the inter-packet interval.
    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        self.settings.interval = interval;
        self
    }

    /// Set the process timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Replace all settings.
    pub fn with_settings(mut self, settings: ProbeSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl ProbeSettings {
    /// Validate the settings.
    ///
    /// # Errors
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.binary.trim().is_empty() {
            return Err("binary path cannot be empty".to_string());
        }
        if self.count == 0 {
            return Err("count must be positive".to_string());
        }
        // ping takes whole seconds for -W and -w.
        if self.reply_wait < Duration::from_secs(1) {
            return Err(format!(
                "reply_wait must be at least 1s, got {:?}",
                self.reply_wait
            ));
        }
        if self.deadline < Duration::from_secs(1) {
            return Err(format!(
                "deadline must be at least 1s, got {:?}",
                self.deadline
            ));
        }
        if self.timeout.is_zero() {
            return Err("timeout must be positive".to_string());
        }
        Ok(())
    }
}
