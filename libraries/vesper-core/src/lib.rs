//! Vesper Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Vesper Player.
//!
//! This crate provides the foundational building blocks shared between the
//! playback engine and the media-session layer:
//! - **Domain Types**: [`PlaybackStatus`], [`PlaybackSnapshot`],
//!   [`TransportActions`], [`TransportCommand`]
//! - **Record Store**: the [`PlaybackStore`] trait for recent-track and
//!   elapsed-position persistence
//! - **Error Handling**: unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use vesper_core::{PlaybackSnapshot, PlaybackStatus, TransportActions};
//!
//! // A snapshot as the player would report it mid-track
//! let snapshot = PlaybackSnapshot {
//!     status: PlaybackStatus::Playing,
//!     position_millis: 42_000,
//!     actions: TransportActions::SKIP_NEXT.with(TransportActions::SKIP_PREVIOUS),
//!     track_id: Some("track-1".to_string()),
//!     title: Some("Evening Broadcast".to_string()),
//!     subtitle: Some("Vesper Radio".to_string()),
//! };
//!
//! assert!(!snapshot.is_terminal());
//! assert!(snapshot.actions.contains(TransportActions::SKIP_NEXT));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use store::{MemoryPlaybackStore, PlaybackStore};
pub use types::{PlaybackSnapshot, PlaybackStatus, TransportActions, TransportCommand};
