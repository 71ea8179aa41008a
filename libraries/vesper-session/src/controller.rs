//! Notification lifecycle controller
//!
//! The state machine gluing the player's snapshot stream to the host
//! presentation surface and the command channel. A session moves
//! `Idle -> Active -> Foreground -> Idle`; the terminal transition tears
//! everything down, and a torn-down session is never reused; the next
//! playback attempt opens a fresh one.

use crate::adapter::{PlayerCallbackAdapter, PlayerTransport};
use crate::commands::{CommandBus, SubscriptionId};
use crate::config::SessionConfig;
use crate::descriptor::PresentationDescriptor;
use crate::error::Result;
use crate::surface::NotificationSurface;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use vesper_core::{PlaybackSnapshot, PlaybackStatus};

/// Observable side effects of one snapshot, in emission order
///
/// Effects record attempted operations: a transient surface failure is
/// logged and the effect still appears, because the next snapshot
/// re-renders the slot and self-corrects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEffect {
    /// The command listener was subscribed for a new session
    ListenerRegistered,

    /// The host service backing the session was started
    ServiceStarted,

    /// The session was promoted to a foreground service
    PromotedToForeground {
        /// Descriptor shown at promotion time
        descriptor: PresentationDescriptor,
    },

    /// The (background) notification was shown or refreshed
    PresentationUpdated {
        /// Descriptor now on display
        descriptor: PresentationDescriptor,
    },

    /// Foreground status was dropped; the notification stays visible
    DemotedFromForeground,

    /// The notification was removed
    PresentationCancelled,

    /// The command listener was unsubscribed
    ListenerUnregistered,

    /// The host service was stopped
    ServiceStopped,
}

/// Mutable lifecycle state of one playback session
///
/// Exactly one per running session: created on the first non-terminal
/// snapshot, dropped on teardown. Only the controller touches it.
#[derive(Debug)]
struct ControllerSession {
    /// Command-channel handle held for the session lifetime
    subscription: SubscriptionId,

    /// Whether the session currently holds foreground status;
    /// implies the last status was `Playing`
    foreground_active: bool,

    /// Status of the most recently applied snapshot
    last_status: PlaybackStatus,
}

/// Notification lifecycle controller
///
/// Owns the notification slot and the command-channel subscription for
/// the lifetime of one session. [`handle_snapshot`](Self::handle_snapshot)
/// must be called once per player state change, serialized by the host;
/// command dispatch may interleave but never mutates session state.
pub struct SessionController {
    config: SessionConfig,
    surface: Arc<dyn NotificationSurface>,
    bus: Arc<CommandBus>,
    adapter: Arc<PlayerCallbackAdapter>,
    session: Option<ControllerSession>,
}

impl SessionController {
    /// Create a controller bound to a surface, a command bus, and a player
    ///
    /// Creates the notification channel (idempotent) and clears stale
    /// slots left behind by a previous process. Both are transient
    /// operations: failures are logged and the controller stays usable.
    pub fn new(
        config: SessionConfig,
        surface: Arc<dyn NotificationSurface>,
        bus: Arc<CommandBus>,
        transport: Arc<dyn PlayerTransport>,
    ) -> Self {
        if let Err(e) = surface.create_channel(&config) {
            warn!("notification channel creation failed: {e}");
        }
        if let Err(e) = surface.cancel_all() {
            warn!("clearing stale notifications failed: {e}");
        }

        Self {
            config,
            surface,
            bus,
            adapter: Arc::new(PlayerCallbackAdapter::new(transport)),
            session: None,
        }
    }

    /// True while a session exists (listener registered, not torn down)
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// True while the session holds foreground status
    #[must_use]
    pub fn is_foreground(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.foreground_active)
    }

    /// Status of the most recent snapshot of the current session
    #[must_use]
    pub fn last_status(&self) -> Option<PlaybackStatus> {
        self.session.as_ref().map(|s| s.last_status)
    }

    /// Apply one playback snapshot
    ///
    /// Decides create/update/demote/teardown for the presentation, keeps
    /// the command-channel subscription registered at most once per
    /// session, and returns every side effect in emission order.
    ///
    /// # Errors
    /// Only unrecoverable host failures (the service could not be started
    /// or promoted to the foreground) surface as errors; transient
    /// presentation failures are logged and swallowed. After an error the
    /// controller still reaches idle on the next terminal snapshot.
    pub fn handle_snapshot(&mut self, snapshot: &PlaybackSnapshot) -> Result<Vec<SessionEffect>> {
        let mut effects = Vec::new();

        if snapshot.is_terminal() {
            self.teardown(&mut effects);
            return Ok(effects);
        }

        // The first non-terminal snapshot opens the session and registers
        // the command listener, at most once per session lifetime.
        if self.session.is_none() {
            let subscription = self.bus.subscribe(self.adapter.clone());
            self.session = Some(ControllerSession {
                subscription,
                foreground_active: false,
                last_status: snapshot.status,
            });
            effects.push(SessionEffect::ListenerRegistered);
            info!(status = snapshot.status.as_str(), "playback session opened");
        }

        let Some(session) = self.session.as_mut() else {
            return Ok(effects);
        };

        // No presentation without minimal metadata: never render a blank
        // control surface. The snapshot is otherwise ignored, keeping
        // foreground status consistent with the last applied status.
        if snapshot.title.is_none() {
            debug!("snapshot without metadata, presentation unchanged");
            return Ok(effects);
        }
        session.last_status = snapshot.status;

        let descriptor = PresentationDescriptor::build(snapshot);

        if snapshot.status == PlaybackStatus::Playing {
            if session.foreground_active {
                // Already promoted; refresh in place.
                if let Err(e) = self
                    .surface
                    .show_or_update(self.config.notification_id, &descriptor)
                {
                    warn!("presentation update failed: {e}");
                }
                effects.push(SessionEffect::PresentationUpdated { descriptor });
            } else {
                self.surface.start_service()?;
                effects.push(SessionEffect::ServiceStarted);

                self.surface
                    .promote_foreground(self.config.notification_id, &descriptor)?;
                session.foreground_active = true;
                effects.push(SessionEffect::PromotedToForeground { descriptor });
                info!("session promoted to foreground");
            }
        } else {
            if session.foreground_active {
                if let Err(e) = self.surface.demote_foreground() {
                    warn!("foreground demotion failed: {e}");
                }
                session.foreground_active = false;
                effects.push(SessionEffect::DemotedFromForeground);
                debug!("session demoted from foreground");
            }

            if let Err(e) = self
                .surface
                .show_or_update(self.config.notification_id, &descriptor)
            {
                warn!("presentation update failed: {e}");
            }
            effects.push(SessionEffect::PresentationUpdated { descriptor });
        }

        Ok(effects)
    }

    /// Terminal transition: always lands idle, even when individual
    /// teardown steps fail.
    fn teardown(&mut self, effects: &mut Vec<SessionEffect>) {
        let Some(session) = self.session.take() else {
            // No listener was registered and no service started; an
            // immediate stop is a no-op.
            debug!("terminal snapshot while idle, nothing to tear down");
            return;
        };

        if let Err(e) = self.surface.cancel(self.config.notification_id) {
            warn!("notification cancel failed: {e}");
        }
        effects.push(SessionEffect::PresentationCancelled);

        // Unregistration is best-effort; a dead listener must never keep
        // the service alive.
        if let Err(e) = self.bus.unsubscribe(session.subscription) {
            warn!("command listener was not registered: {e}");
        }
        effects.push(SessionEffect::ListenerUnregistered);

        if let Err(e) = self.surface.stop_service() {
            warn!("service stop failed: {e}");
        }
        effects.push(SessionEffect::ServiceStopped);

        info!("playback session closed");
    }
}
