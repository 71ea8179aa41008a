/// Transport command intents carried by the command channel
use serde::{Deserialize, Serialize};

/// A user-initiated transport request
///
/// The fixed set of intents the command channel recognizes. Intent string
/// identity is exact; hosts route on these strings verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportCommand {
    /// Skip to the next track
    Next,
    /// Pause playback
    Pause,
    /// Start or resume playback
    Play,
    /// Return to the previous track
    Previous,
}

impl TransportCommand {
    /// Intent string used for host routing
    #[must_use]
    pub fn as_intent(&self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Pause => "Pause",
            Self::Play => "Play",
            Self::Previous => "Previous",
        }
    }

    /// Decode an intent string; unknown kinds yield `None`
    #[must_use]
    pub fn from_intent(intent: &str) -> Option<Self> {
        match intent {
            "Next" => Some(Self::Next),
            "Pause" => Some(Self::Pause),
            "Play" => Some(Self::Play),
            "Previous" => Some(Self::Previous),
            _ => None,
        }
    }

    /// All commands, in channel registration order
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Next, Self::Pause, Self::Play, Self::Previous]
    }
}

impl std::fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_intent())
    }
}
