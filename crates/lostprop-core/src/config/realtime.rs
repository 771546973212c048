//! Real-time snapshot configuration.

use serde::{Deserialize, Serialize};

/// Settings for snapshot subscriptions and the banner watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Interval between banner visibility re-evaluations, in seconds.
    #[serde(default = "default_banner_poll")]
    pub banner_poll_seconds: u64,
    /// WebSocket ping interval in seconds.
    #[serde(default = "default_ping")]
    pub ping_interval_seconds: u64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            banner_poll_seconds: default_banner_poll(),
            ping_interval_seconds: default_ping(),
        }
    }
}

fn default_banner_poll() -> u64 {
    60
}

fn default_ping() -> u64 {
    30
}
