//! Core domain types for Vesper Player

mod command;
mod playback;

pub use command::TransportCommand;
pub use playback::{PlaybackSnapshot, PlaybackStatus, TransportActions};
