//! Session configuration

use serde::{Deserialize, Serialize};

/// Configuration for the media-session notification slot
///
/// Channel identity is created once, idempotently, before first use; the
/// slot id stays fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Stable id of the notification slot owned by the session
    pub notification_id: u32,

    /// Notification channel id
    pub channel_id: String,

    /// Human-readable channel name
    pub channel_name: String,

    /// Show full controls on the lock screen
    pub public_on_lockscreen: bool,

    /// Show a launcher badge while the session is active
    pub show_badge: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notification_id: 1,
            channel_id: "vesper.playback".to_string(),
            channel_name: "Playback".to_string(),
            public_on_lockscreen: true,
            show_badge: true,
        }
    }
}
