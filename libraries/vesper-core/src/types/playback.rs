/// Playback state types shared between the player and the session layer
use serde::{Deserialize, Serialize};

/// Playback status reported by the player
///
/// Every snapshot carries exactly one status; `None` means no player
/// session exists at all, which makes status matching exhaustive instead
/// of nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// No player session exists
    #[default]
    None,
    /// Playback has fully stopped
    Stopped,
    /// Paused mid-track
    Paused,
    /// Currently playing
    Playing,
}

impl PlaybackStatus {
    /// True for statuses that end a playback session
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::None | Self::Stopped)
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Stopped => "stopped",
            Self::Paused => "paused",
            Self::Playing => "playing",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "stopped" => Some(Self::Stopped),
            "paused" => Some(Self::Paused),
            "playing" => Some(Self::Playing),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of transport actions the player currently supports
///
/// A small bitset; the session layer only ever inspects skip availability
/// to decide which controls to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportActions(u8);

impl TransportActions {
    /// Skip-to-next is available
    pub const SKIP_NEXT: Self = Self(1 << 0);

    /// Skip-to-previous is available
    pub const SKIP_PREVIOUS: Self = Self(1 << 1);

    /// Empty action set
    #[must_use]
    pub fn empty() -> Self {
        Self(0)
    }

    /// Union of two action sets
    #[must_use]
    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every action in `other` is present
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no action is present
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bit representation
    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }
}

/// One immutable report of player state at one instant
///
/// Produced by the player on every transition and superseded by the next
/// snapshot; the session layer holds at most the most recently received
/// one. A snapshot has no identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Player status at the time of the report
    pub status: PlaybackStatus,

    /// Elapsed position within the current track, in milliseconds
    pub position_millis: i64,

    /// Transport actions currently available
    pub actions: TransportActions,

    /// Stable identifier of the current track, if one is loaded
    pub track_id: Option<String>,

    /// Track title for display
    pub title: Option<String>,

    /// Secondary display line (artist, program, ...)
    pub subtitle: Option<String>,
}

impl PlaybackSnapshot {
    /// Snapshot with the given status and no metadata
    #[must_use]
    pub fn with_status(status: PlaybackStatus) -> Self {
        Self {
            status,
            position_millis: 0,
            actions: TransportActions::empty(),
            track_id: None,
            title: None,
            subtitle: None,
        }
    }

    /// True when this snapshot ends the playback session
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
