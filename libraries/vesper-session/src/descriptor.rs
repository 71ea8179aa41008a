//! Presentation descriptors
//!
//! Pure derivation of what the notification slot should display from one
//! playback snapshot. A descriptor is re-derivable at any time and never
//! persisted.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use vesper_core::{PlaybackSnapshot, PlaybackStatus, TransportActions};

/// A single control exposed on the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    /// Return to the previous track
    Previous,
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Skip to the next track
    Next,
}

/// What the presentation surface should display for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationDescriptor {
    /// Primary line; absent when the snapshot carried no metadata
    pub title: Option<String>,

    /// Secondary line
    pub subtitle: Option<String>,

    /// Host treats the notification as ongoing (not user-dismissable)
    pub is_ongoing: bool,

    /// Render a running elapsed-time chronometer
    pub show_elapsed_time: bool,

    /// Wall-clock origin for the chronometer, in epoch milliseconds;
    /// zero when not playing
    pub reference_time_millis: i64,

    /// Controls in render order: previous?, play-or-pause, next?
    pub actions: Vec<ControlAction>,
}

impl PresentationDescriptor {
    /// Build a descriptor against an explicit wall clock
    ///
    /// Total function: every snapshot yields a descriptor, including ones
    /// without metadata. Callers decide whether to actually present those.
    ///
    /// The action order is fixed because the surface renders a compact
    /// three-slot control row as previous, play-or-pause, next.
    #[must_use]
    pub fn build_at(snapshot: &PlaybackSnapshot, now_millis: i64) -> Self {
        let playing = snapshot.status == PlaybackStatus::Playing;

        let mut actions = Vec::with_capacity(3);
        if snapshot.actions.contains(TransportActions::SKIP_PREVIOUS) {
            actions.push(ControlAction::Previous);
        }
        actions.push(if playing {
            ControlAction::Pause
        } else {
            ControlAction::Play
        });
        if snapshot.actions.contains(TransportActions::SKIP_NEXT) {
            actions.push(ControlAction::Next);
        }

        Self {
            title: snapshot.title.clone(),
            subtitle: snapshot.subtitle.clone(),
            is_ongoing: playing,
            show_elapsed_time: playing,
            reference_time_millis: if playing {
                now_millis - snapshot.position_millis
            } else {
                0
            },
            actions,
        }
    }

    /// Build a descriptor against the current wall clock
    #[must_use]
    pub fn build(snapshot: &PlaybackSnapshot) -> Self {
        Self::build_at(snapshot, now_millis())
    }

    /// Indices of the actions to surface in the compact control row
    ///
    /// At most three actions are ever built, in fixed order, so every
    /// action position participates in the compact row.
    #[must_use]
    pub fn compact_action_indices(&self) -> Vec<usize> {
        (0..self.actions.len()).collect()
    }
}

/// Milliseconds since the Unix epoch
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
