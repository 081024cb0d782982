//! Background task polling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed-interval, bounded polling used for async resume feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Delay before each status check, in milliseconds.
    #[serde(default = "default_interval")]
    pub interval_ms: u64,
    /// Maximum number of status checks before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl PollingConfig {
    /// Poll interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_interval() -> u64 {
    2000
}

fn default_max_attempts() -> u32 {
    30
}
