//! Player callback adapter
//!
//! Terminal end of the command channel: forwards each decoded transport
//! command, unchanged and exactly once, to the player's entry points.

use crate::commands::CommandListener;
use std::sync::Arc;
use tracing::debug;
use vesper_core::TransportCommand;

/// The real player's transport entry points
///
/// Implemented by the playback engine. The session layer never interprets
/// commands beyond routing them here.
pub trait PlayerTransport: Send + Sync {
    /// User asked to start or resume playback
    fn on_play(&self);

    /// User asked to pause playback
    fn on_pause(&self);

    /// User asked to skip to the next track
    fn on_skip_to_next(&self);

    /// User asked to return to the previous track
    fn on_skip_to_previous(&self);
}

/// Routes bus commands to a [`PlayerTransport`]
pub struct PlayerCallbackAdapter {
    transport: Arc<dyn PlayerTransport>,
}

impl PlayerCallbackAdapter {
    /// Wrap the player's transport entry points
    #[must_use]
    pub fn new(transport: Arc<dyn PlayerTransport>) -> Self {
        Self { transport }
    }
}

impl CommandListener for PlayerCallbackAdapter {
    fn on_command(&self, command: TransportCommand) {
        debug!(command = command.as_intent(), "forwarding transport command");
        match command {
            TransportCommand::Next => self.transport.on_skip_to_next(),
            TransportCommand::Pause => self.transport.on_pause(),
            TransportCommand::Play => self.transport.on_play(),
            TransportCommand::Previous => self.transport.on_skip_to_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPlayer {
        calls: Mutex<Vec<&'static str>>,
    }

    impl PlayerTransport for RecordingPlayer {
        fn on_play(&self) {
            self.calls.lock().unwrap().push("play");
        }

        fn on_pause(&self) {
            self.calls.lock().unwrap().push("pause");
        }

        fn on_skip_to_next(&self) {
            self.calls.lock().unwrap().push("next");
        }

        fn on_skip_to_previous(&self) {
            self.calls.lock().unwrap().push("previous");
        }
    }

    #[test]
    fn each_command_reaches_its_entry_point() {
        let player = Arc::new(RecordingPlayer::default());
        let adapter = PlayerCallbackAdapter::new(player.clone());

        adapter.on_command(TransportCommand::Next);
        adapter.on_command(TransportCommand::Pause);
        adapter.on_command(TransportCommand::Play);
        adapter.on_command(TransportCommand::Previous);

        assert_eq!(
            *player.calls.lock().unwrap(),
            vec!["next", "pause", "play", "previous"]
        );
    }
}
