//! Playback record store
//!
//! Narrow persistence seam for playback history: the most recently played
//! track and the elapsed position per track. Real implementations live
//! outside the session core (SQLite on desktop, a remote API on
//! companions); the session layer only ever talks to this trait.

use crate::error::{CoreError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-based record store for playback history
///
/// Implementations must tolerate concurrent callers; every method is a
/// single self-contained read or write.
#[async_trait]
pub trait PlaybackStore: Send + Sync {
    /// Record the most recently played track
    async fn set_recent(&self, track_id: &str) -> Result<()>;

    /// Most recently played track, if any
    async fn recent(&self) -> Result<Option<String>>;

    /// Persist the elapsed position for a track
    async fn set_position(&self, track_id: &str, position_millis: i64) -> Result<()>;

    /// Last persisted position for a track
    async fn position(&self, track_id: &str) -> Result<Option<i64>>;
}

/// In-memory [`PlaybackStore`]
///
/// Backs tests and hosts without durable storage. Records do not survive
/// the process.
#[derive(Debug, Default)]
pub struct MemoryPlaybackStore {
    recent: Mutex<Option<String>>,
    positions: Mutex<HashMap<String, i64>>,
}

impl MemoryPlaybackStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaybackStore for MemoryPlaybackStore {
    async fn set_recent(&self, track_id: &str) -> Result<()> {
        let mut recent = self
            .recent
            .lock()
            .map_err(|_| CoreError::store("recent record lock poisoned"))?;
        *recent = Some(track_id.to_string());
        Ok(())
    }

    async fn recent(&self) -> Result<Option<String>> {
        let recent = self
            .recent
            .lock()
            .map_err(|_| CoreError::store("recent record lock poisoned"))?;
        Ok(recent.clone())
    }

    async fn set_position(&self, track_id: &str, position_millis: i64) -> Result<()> {
        let mut positions = self
            .positions
            .lock()
            .map_err(|_| CoreError::store("position record lock poisoned"))?;
        positions.insert(track_id.to_string(), position_millis);
        Ok(())
    }

    async fn position(&self, track_id: &str) -> Result<Option<i64>> {
        let positions = self
            .positions
            .lock()
            .map_err(|_| CoreError::store("position record lock poisoned"))?;
        Ok(positions.get(track_id).copied())
    }
}
