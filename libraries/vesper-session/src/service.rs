//! Session service glue
//!
//! Owns the lifecycle controller and records playback history around it
//! against an injected record store. Persistence is best-effort: store
//! failures never change what the controller does or reports.

use crate::controller::{SessionController, SessionEffect};
use crate::error::Result;
use std::sync::Arc;
use tracing::warn;
use vesper_core::{PlaybackSnapshot, PlaybackStore};

/// Media-session service: lifecycle controller plus history recording
pub struct MediaSessionService {
    controller: SessionController,
    store: Arc<dyn PlaybackStore>,
}

impl MediaSessionService {
    /// Wrap a controller with a playback record store
    pub fn new(controller: SessionController, store: Arc<dyn PlaybackStore>) -> Self {
        Self { controller, store }
    }

    /// Forward one snapshot to the controller, then persist history
    ///
    /// Recent-track and elapsed-position records are written for every
    /// non-terminal snapshot that carries a track id.
    ///
    /// # Errors
    /// Propagates the controller's unrecoverable errors unchanged; store
    /// failures are logged and swallowed.
    pub async fn on_snapshot(&mut self, snapshot: &PlaybackSnapshot) -> Result<Vec<SessionEffect>> {
        let effects = self.controller.handle_snapshot(snapshot)?;

        if !snapshot.is_terminal() {
            if let Some(track_id) = snapshot.track_id.as_deref() {
                if let Err(e) = self.store.set_recent(track_id).await {
                    warn!("recording recent track failed: {e}");
                }
                if let Err(e) = self
                    .store
                    .set_position(track_id, snapshot.position_millis)
                    .await
                {
                    warn!("recording playback position failed: {e}");
                }
            }
        }

        Ok(effects)
    }

    /// The wrapped controller
    #[must_use]
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }
}
