//! Property-based tests for the media-session lifecycle
//!
//! Uses proptest to verify state-machine and builder invariants across
//! many random snapshot sequences.

use proptest::prelude::*;
use std::sync::Arc;
use vesper_core::{PlaybackSnapshot, PlaybackStatus, TransportActions};
use vesper_session::{
    CommandBus, ControlAction, NullSurface, PlayerTransport, PresentationDescriptor,
    SessionConfig, SessionController, SessionEffect,
};

// ===== Helpers =====

struct IdlePlayer;

impl PlayerTransport for IdlePlayer {
    fn on_play(&self) {}
    fn on_pause(&self) {}
    fn on_skip_to_next(&self) {}
    fn on_skip_to_previous(&self) {}
}

fn controller() -> (SessionController, Arc<CommandBus>) {
    let bus = Arc::new(CommandBus::new());
    let controller = SessionController::new(
        SessionConfig::default(),
        Arc::new(NullSurface),
        bus.clone(),
        Arc::new(IdlePlayer),
    );
    (controller, bus)
}

fn arbitrary_status() -> impl Strategy<Value = PlaybackStatus> {
    prop_oneof![
        Just(PlaybackStatus::None),
        Just(PlaybackStatus::Stopped),
        Just(PlaybackStatus::Paused),
        Just(PlaybackStatus::Playing),
    ]
}

fn arbitrary_actions() -> impl Strategy<Value = TransportActions> {
    (any::<bool>(), any::<bool>()).prop_map(|(next, previous)| {
        let mut actions = TransportActions::empty();
        if next {
            actions = actions.with(TransportActions::SKIP_NEXT);
        }
        if previous {
            actions = actions.with(TransportActions::SKIP_PREVIOUS);
        }
        actions
    })
}

fn arbitrary_snapshot() -> impl Strategy<Value = PlaybackSnapshot> {
    (
        arbitrary_status(),
        0i64..3_600_000,
        arbitrary_actions(),
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of("[A-Za-z ]{1,30}"),
        proptest::option::of("[A-Za-z ]{1,20}"),
    )
        .prop_map(
            |(status, position_millis, actions, track_id, title, subtitle)| PlaybackSnapshot {
                status,
                position_millis,
                actions,
                track_id,
                title,
                subtitle,
            },
        )
}

fn arbitrary_snapshots() -> impl Strategy<Value = Vec<PlaybackSnapshot>> {
    prop::collection::vec(arbitrary_snapshot(), 1..40)
}

// ===== State-Machine Properties =====

proptest! {
    /// Property: a terminal snapshot always lands the controller idle
    /// with no bus subscription, whatever came before
    #[test]
    fn terminal_snapshot_always_reaches_idle(
        snapshots in arbitrary_snapshots(),
        terminal in prop_oneof![Just(PlaybackStatus::None), Just(PlaybackStatus::Stopped)],
    ) {
        let (mut controller, bus) = controller();
        for snapshot in &snapshots {
            controller.handle_snapshot(snapshot).unwrap();
        }

        controller
            .handle_snapshot(&PlaybackSnapshot::with_status(terminal))
            .unwrap();

        prop_assert!(!controller.is_active());
        prop_assert!(!controller.is_foreground());
        prop_assert_eq!(bus.subscriber_count(), 0);
    }

    /// Property: the command listener is subscribed exactly while a
    /// session exists, never more than once
    #[test]
    fn listener_subscribed_iff_session_active(snapshots in arbitrary_snapshots()) {
        let (mut controller, bus) = controller();

        for snapshot in &snapshots {
            controller.handle_snapshot(snapshot).unwrap();
            prop_assert_eq!(
                bus.subscriber_count(),
                usize::from(controller.is_active())
            );
        }
    }

    /// Property: foreground status implies the last applied snapshot was
    /// a playing one
    #[test]
    fn foreground_implies_playing(snapshots in arbitrary_snapshots()) {
        let (mut controller, _bus) = controller();

        for snapshot in &snapshots {
            controller.handle_snapshot(snapshot).unwrap();
            if controller.is_foreground() {
                prop_assert_eq!(controller.last_status(), Some(PlaybackStatus::Playing));
            }
        }
    }

    /// Property: promotion fires exactly on unpromoted playing snapshots
    /// with metadata: at most once per contiguous playing run
    #[test]
    fn promotion_matches_reference_model(snapshots in arbitrary_snapshots()) {
        let (mut controller, _bus) = controller();
        let mut promoted = false;

        for snapshot in &snapshots {
            let effects = controller.handle_snapshot(snapshot).unwrap();
            let promotions = effects
                .iter()
                .filter(|e| matches!(e, SessionEffect::PromotedToForeground { .. }))
                .count();

            if snapshot.is_terminal() {
                promoted = false;
                prop_assert_eq!(promotions, 0);
            } else if snapshot.title.is_none() {
                // Ignored snapshot; promotion state untouched.
                prop_assert_eq!(promotions, 0);
            } else if snapshot.status == PlaybackStatus::Playing {
                prop_assert_eq!(promotions, usize::from(!promoted));
                promoted = true;
            } else {
                promoted = false;
                prop_assert_eq!(promotions, 0);
            }
        }
    }

    /// Property: effects only ever arrive in lifecycle order within one
    /// snapshot (registration first, teardown steps last)
    #[test]
    fn registration_always_precedes_other_effects(snapshots in arbitrary_snapshots()) {
        let (mut controller, _bus) = controller();

        for snapshot in &snapshots {
            let effects = controller.handle_snapshot(snapshot).unwrap();
            if let Some(position) = effects
                .iter()
                .position(|e| matches!(e, SessionEffect::ListenerRegistered))
            {
                prop_assert_eq!(position, 0);
            }
        }
    }
}

// ===== Builder Properties =====

proptest! {
    /// Property: the action row is always previous?, play-or-pause, next?
    #[test]
    fn descriptor_action_order_is_fixed(
        snapshot in arbitrary_snapshot(),
        now in 0i64..4_102_444_800_000,
    ) {
        let descriptor = PresentationDescriptor::build_at(&snapshot, now);
        let actions = &descriptor.actions;

        let toggles = actions
            .iter()
            .filter(|a| matches!(a, ControlAction::Play | ControlAction::Pause))
            .count();
        prop_assert_eq!(toggles, 1);

        if let Some(position) = actions.iter().position(|a| *a == ControlAction::Previous) {
            prop_assert_eq!(position, 0);
        }
        if let Some(position) = actions.iter().position(|a| *a == ControlAction::Next) {
            prop_assert_eq!(position, actions.len() - 1);
        }

        let expects_pause = snapshot.status == PlaybackStatus::Playing;
        let expected_toggle = if expects_pause {
            &ControlAction::Pause
        } else {
            &ControlAction::Play
        };
        prop_assert!(actions.contains(expected_toggle));
    }

    /// Property: building twice from the same inputs yields identical
    /// descriptors
    #[test]
    fn descriptor_build_is_idempotent(
        snapshot in arbitrary_snapshot(),
        now in 0i64..4_102_444_800_000,
    ) {
        let first = PresentationDescriptor::build_at(&snapshot, now);
        let second = PresentationDescriptor::build_at(&snapshot, now);
        prop_assert_eq!(first, second);
    }

    /// Property: the chronometer reference is pinned to zero unless playing
    #[test]
    fn chronometer_only_runs_while_playing(
        snapshot in arbitrary_snapshot(),
        now in 0i64..4_102_444_800_000,
    ) {
        let descriptor = PresentationDescriptor::build_at(&snapshot, now);

        if snapshot.status == PlaybackStatus::Playing {
            prop_assert!(descriptor.is_ongoing);
            prop_assert!(descriptor.show_elapsed_time);
            prop_assert_eq!(
                descriptor.reference_time_millis,
                now - snapshot.position_millis
            );
        } else {
            prop_assert!(!descriptor.is_ongoing);
            prop_assert!(!descriptor.show_elapsed_time);
            prop_assert_eq!(descriptor.reference_time_millis, 0);
        }
    }
}
