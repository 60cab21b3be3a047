//! Navigation settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings shared by the login form and the navigation screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Hostname pre-filled in the login form
    #[serde(default)]
    pub default_host: Option<String>,
    /// Username pre-filled in the login form
    #[serde(default)]
    pub default_user: Option<String>,
    /// Delay between task polls while a gauge is shown
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    500
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_host: None,
            default_user: None,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
