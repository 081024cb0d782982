//! Chat WebSocket configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) chat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// How long to wait for the WebSocket handshake.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Buffer size of the inbound frame channel per connection.
    #[serde(default = "default_frame_buffer")]
    pub frame_buffer_size: usize,
}

impl RealtimeConfig {
    /// Handshake timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            frame_buffer_size: default_frame_buffer(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_frame_buffer() -> usize {
    256
}
