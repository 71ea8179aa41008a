//! Presentation surface seam
//!
//! The OS-facing side of the session: one notification slot plus the
//! foreground-service lifecycle. Implementations are host-specific; the
//! session layer owns the slot exclusively for the lifetime of a session
//! and is the only component issuing calls against it.

use crate::config::SessionConfig;
use crate::descriptor::PresentationDescriptor;
use crate::error::Result;

/// Host presentation surface driven by the lifecycle controller
///
/// Methods take `&self`; implementations use interior mutability where
/// they track host handles.
pub trait NotificationSurface: Send + Sync {
    /// Create the notification channel
    ///
    /// Idempotent; called once before first use.
    fn create_channel(&self, config: &SessionConfig) -> Result<()>;

    /// Clear stale notification slots left behind by a previous process
    fn cancel_all(&self) -> Result<()>;

    /// Show the notification, or refresh it in place if already shown
    fn show_or_update(&self, id: u32, descriptor: &PresentationDescriptor) -> Result<()>;

    /// Remove the notification
    fn cancel(&self, id: u32) -> Result<()>;

    /// Start the host service backing the session
    fn start_service(&self) -> Result<()>;

    /// Promote the session to a foreground service showing `descriptor`
    fn promote_foreground(&self, id: u32, descriptor: &PresentationDescriptor) -> Result<()>;

    /// Drop foreground status, keeping the notification visible
    fn demote_foreground(&self) -> Result<()>;

    /// Stop the host service, ending the session
    fn stop_service(&self) -> Result<()>;
}

/// Surface that discards every call
///
/// Backs headless hosts and tests that only exercise control flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl NotificationSurface for NullSurface {
    fn create_channel(&self, _config: &SessionConfig) -> Result<()> {
        Ok(())
    }

    fn cancel_all(&self) -> Result<()> {
        Ok(())
    }

    fn show_or_update(&self, _id: u32, _descriptor: &PresentationDescriptor) -> Result<()> {
        Ok(())
    }

    fn cancel(&self, _id: u32) -> Result<()> {
        Ok(())
    }

    fn start_service(&self) -> Result<()> {
        Ok(())
    }

    fn promote_foreground(&self, _id: u32, _descriptor: &PresentationDescriptor) -> Result<()> {
        Ok(())
    }

    fn demote_foreground(&self) -> Result<()> {
        Ok(())
    }

    fn stop_service(&self) -> Result<()> {
        Ok(())
    }
}
