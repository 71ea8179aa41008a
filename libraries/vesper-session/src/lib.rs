//! Vesper Player - Media Session Management
//!
//! Platform-agnostic media-session management for Vesper Player.
//!
//! This crate provides:
//! - Presentation descriptors derived from playback snapshots
//! - The notification lifecycle controller (foreground promotion,
//!   demotion, teardown)
//! - A command bus carrying transport intents back into the player
//! - The player callback adapter
//! - Session service glue persisting playback history
//!
//! # Architecture
//!
//! `vesper-session` is completely platform-agnostic:
//! - No dependency on any OS notification API
//! - No dependency on the audio pipeline
//! - Works on desktop, mobile bridges, and headless hosts
//!
//! Host-specific code (the actual notification slot and foreground
//! service) is provided via the [`NotificationSurface`] trait; the player
//! is reached via [`PlayerTransport`].
//!
//! The controller assumes snapshot delivery is serialized by the host, in
//! production order. Command dispatch may interleave with snapshots but
//! never mutates session state.
//!
//! # Example: Driving a session
//!
//! ```rust
//! use std::sync::Arc;
//! use vesper_core::{PlaybackSnapshot, PlaybackStatus, TransportActions};
//! use vesper_session::{
//!     CommandBus, NullSurface, PlayerTransport, SessionConfig, SessionController,
//! };
//!
//! struct MyPlayer;
//!
//! impl PlayerTransport for MyPlayer {
//!     fn on_play(&self) { /* resume the engine */ }
//!     fn on_pause(&self) { /* pause the engine */ }
//!     fn on_skip_to_next(&self) { /* advance the queue */ }
//!     fn on_skip_to_previous(&self) { /* rewind the queue */ }
//! }
//!
//! let bus = Arc::new(CommandBus::new());
//! let mut controller = SessionController::new(
//!     SessionConfig::default(),
//!     Arc::new(NullSurface),   // real hosts talk to the OS here
//!     bus.clone(),
//!     Arc::new(MyPlayer),
//! );
//!
//! // The player reports a state change...
//! let snapshot = PlaybackSnapshot {
//!     status: PlaybackStatus::Playing,
//!     position_millis: 0,
//!     actions: TransportActions::SKIP_NEXT,
//!     track_id: Some("track-1".to_string()),
//!     title: Some("Evening Broadcast".to_string()),
//!     subtitle: Some("Vesper Radio".to_string()),
//! };
//! let effects = controller.handle_snapshot(&snapshot)?;
//! assert!(!effects.is_empty());
//!
//! // ...and the OS routes a button press back through the bus.
//! bus.dispatch_intent("Pause");
//! # Ok::<(), vesper_session::SessionError>(())
//! ```

mod adapter;
mod commands;
mod config;
mod controller;
mod descriptor;
mod error;
mod service;
mod surface;

// Public exports
pub use adapter::{PlayerCallbackAdapter, PlayerTransport};
pub use commands::{CommandBus, CommandListener, SubscriptionId};
pub use config::SessionConfig;
pub use controller::{SessionController, SessionEffect};
pub use descriptor::{ControlAction, PresentationDescriptor};
pub use error::{Result, SessionError};
pub use service::MediaSessionService;
pub use surface::{NotificationSurface, NullSurface};
