//! End-to-end profile behavior against fixture scenes.

use proptest::prelude::*;
use swerve_core::{ActorId, Channel, ManeuverError, ManeuverFrame, Position, SlotIndex};
use swerve_maneuver::lane_shift::{lane_shift_lateral, triangular_angle};
use swerve_maneuver::sudden_stop::{deceleration_factor, effective_stopping_distance, stop_target};
use swerve_maneuver::turn::turn_delta;
use swerve_maneuver::{
    apply_maneuver, Effect, ManeuverKind, ManeuverSpec, ManeuverStateCache, ProfileContext, Side,
    StopTuning, TurnStyle,
};
use swerve_scene::{locate, RowIndex, SceneSnapshot};
use swerve_test_utils::{assert_close, following_pair, lone_actor, two_actor_scene, SceneBuilder};

fn run(
    snap: &mut SceneSnapshot,
    cache: &mut ManeuverStateCache,
    actor: u32,
    kind: ManeuverKind,
    spec: &ManeuverSpec,
    frame: u32,
) -> Result<swerve_maneuver::ProfileOutcome, ManeuverError> {
    let tuning = StopTuning::default();
    let mut ctx = ProfileContext::new(snap, cache, &tuning);
    apply_maneuver(&mut ctx, ActorId(actor), kind, spec, ManeuverFrame(frame))
}

fn stop_spec(frames: u32) -> ManeuverSpec {
    ManeuverSpec::with_duration(frames)
}

fn x_of(snap: &SceneSnapshot, actor: u32) -> f32 {
    let loc = locate(snap, ActorId(actor)).unwrap();
    snap.position_at(loc.row, loc.slot).unwrap().x
}

// ── Turns ─────────────────────────────────────────────────────

#[test]
fn per_call_left_turn_holds_at_max_rotation() {
    let mut snap = two_actor_scene();
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(25);
    spec.angle = 7.0;
    spec.max_rotation = -1.0;
    spec.turn_style = TurnStyle::PerCall;

    let out = run(&mut snap, &mut cache, 1, ManeuverKind::LeftTurn, &spec, 1).unwrap();
    match out.effect {
        Effect::Delta {
            heading, saturated, ..
        } => {
            assert_eq!(heading.abs(), 1.0);
            assert_eq!(heading.signum(), spec.max_rotation.signum());
            assert!(saturated);
        }
        other => panic!("expected Delta, got {other:?}"),
    }
    let loc = locate(&snap, ActorId(1)).unwrap();
    assert_eq!(snap.heading_at(loc.row, loc.slot), Some(-1.0));
}

#[test]
fn turn_is_additive_across_calls() {
    let mut snap = lone_actor(Position::new(0.0, 0.0, 0.0));
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.1;
    spec.max_rotation = 1.0;
    spec.x_offset = 1.0;

    for frame in 0..3 {
        run(&mut snap, &mut cache, 1, ManeuverKind::RightTurn, &spec, frame).unwrap();
    }
    // 0 + 1 + 2 frames worth of accumulation.
    let loc = locate(&snap, ActorId(1)).unwrap();
    assert_close(snap.heading_at(loc.row, loc.slot).unwrap(), -0.3);
    assert_close(x_of(&snap, 1), 3.0);
}

#[test]
fn turn_only_touches_its_own_slot() {
    let mut snap = two_actor_scene();
    let before = snap.clone();
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.5;
    spec.max_rotation = 1.0;
    spec.x_offset = 2.0;
    run(&mut snap, &mut cache, 2, ManeuverKind::LeftTurn, &spec, 1).unwrap();

    let row = RowIndex::new(0, 0);
    assert_eq!(
        snap.position_at(row, SlotIndex(0)),
        before.position_at(row, SlotIndex(0))
    );
    assert_eq!(snap.actor_at(row, SlotIndex(1)), ActorId(2));
}

#[test]
fn writes_cover_every_row_of_the_slot() {
    let mut snap = SceneBuilder::new().rows(3, 2).actor(7, 0.0, 0.0).build();
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.1;
    spec.max_rotation = 1.0;
    let out = run(&mut snap, &mut cache, 7, ManeuverKind::LeftTurn, &spec, 2).unwrap();
    assert_eq!(out.rows_written, 6);
    for row in snap.rows() {
        assert_close(snap.heading_at(row, SlotIndex(0)).unwrap(), 0.2);
    }
}

// ── Lane shift ────────────────────────────────────────────────

#[test]
fn lane_shift_lateral_clamps_at_end() {
    let mut snap = lone_actor(Position::new(0.0, 0.0, 0.0));
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.7;
    spec.z_offset = 0.6;
    spec.max_rotation = -0.6;

    let out = run(&mut snap, &mut cache, 1, ManeuverKind::LeftLaneShift, &spec, 10).unwrap();
    match out.effect {
        Effect::Delta {
            heading,
            translation,
            saturated,
        } => {
            assert_eq!(heading, 0.0);
            assert_eq!(translation.z, 0.5);
            assert!(saturated);
        }
        other => panic!("expected Delta, got {other:?}"),
    }
}

#[test]
fn right_lane_shift_moves_negative_z() {
    let mut snap = lone_actor(Position::new(0.0, 0.0, 1.0));
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.05;
    spec.z_offset = 0.1;
    spec.max_rotation = 1.0;
    run(&mut snap, &mut cache, 1, ManeuverKind::RightLaneShift, &spec, 2).unwrap();

    let loc = locate(&snap, ActorId(1)).unwrap();
    let pos = snap.position_at(loc.row, loc.slot).unwrap();
    assert_close(pos.z, 0.8);
    assert_close(snap.heading_at(loc.row, loc.slot).unwrap(), -0.1);
}

// ── Sudden stop ───────────────────────────────────────────────

#[test]
fn unconstrained_stop_reaches_nominal_distance() {
    let mut snap = lone_actor(Position::new(5.0, 1.0, 2.0));
    let mut cache = ManeuverStateCache::new();
    let spec = stop_spec(10);

    for frame in 0..=10 {
        run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, frame).unwrap();
    }
    let loc = locate(&snap, ActorId(1)).unwrap();
    let pos = snap.position_at(loc.row, loc.slot).unwrap();
    assert_close(pos.x, 15.0);
    assert_eq!(pos.y, 1.0);
    assert_eq!(pos.z, 2.0);
    assert_eq!(snap.velocity_at(loc.row, loc.slot), Some(0.0));
}

#[test]
fn stop_is_shortened_by_vehicle_ahead() {
    let mut snap = following_pair(6.0);
    let mut cache = ManeuverStateCache::new();
    let spec = stop_spec(4);

    let mut last = None;
    for frame in 0..=4 {
        last = Some(run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, frame).unwrap());
    }
    match last.map(|o| o.effect) {
        Some(Effect::Target {
            stopping_distance,
            constrained_by,
            ..
        }) => {
            assert_close(stopping_distance, 4.0);
            assert_eq!(constrained_by, Some(ActorId(2)));
        }
        other => panic!("expected Target, got {other:?}"),
    }
    assert_close(x_of(&snap, 1), 4.0);
    // The vehicle ahead is never moved.
    assert_eq!(x_of(&snap, 2), 6.0);
}

#[test]
fn stop_is_idempotent_per_frame() {
    let mut snap = following_pair(6.0);
    let mut cache = ManeuverStateCache::new();
    let spec = stop_spec(8);
    run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, 0).unwrap();
    run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, 3).unwrap();
    let once = snap.clone();
    run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, 3).unwrap();
    assert_eq!(snap, once);
}

#[test]
fn stop_uses_seeded_baseline() {
    let mut snap = lone_actor(Position::new(5.0, 0.0, 0.0));
    let mut cache = ManeuverStateCache::new();
    cache.set(ActorId(1), Position::new(100.0, 0.0, 0.0));
    let out = run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &stop_spec(10), 5).unwrap();
    assert_close(x_of(&snap, 1), 105.0);
    // Seeded baselines carry no velocity, so the channel is left alone.
    let loc = locate(&snap, ActorId(1)).unwrap();
    assert_eq!(snap.velocity_at(loc.row, loc.slot), Some(5.0));
    assert!(matches!(out.effect, Effect::Target { velocity: None, .. }));
}

// ── Missing actors ────────────────────────────────────────────

#[test]
fn missing_actor_leaves_snapshot_untouched() {
    let mut cache = ManeuverStateCache::new();
    let mut spec = ManeuverSpec::with_duration(10);
    spec.angle = 0.3;
    spec.max_rotation = 1.0;
    spec.z_offset = 0.2;
    for kind in ManeuverKind::ALL {
        let mut snap = two_actor_scene();
        let before = snap.clone();
        let err = run(&mut snap, &mut cache, 42, kind, &spec, 3).unwrap_err();
        assert_eq!(err, ManeuverError::ActorNotFound { actor: ActorId(42) });
        assert_eq!(snap, before, "{kind} mutated the snapshot");
    }
    assert!(cache.is_empty());
}

#[test]
fn vacant_id_is_never_a_target() {
    let mut snap = lone_actor(Position::new(0.0, 0.0, 0.0));
    let before = snap.clone();
    let mut cache = ManeuverStateCache::new();
    let spec = stop_spec(5);
    assert!(run(&mut snap, &mut cache, 0, ManeuverKind::SuddenStop, &spec, 1).is_err());
    assert_eq!(snap, before);
    assert_eq!(snap.as_array()[[0, 0, 1, Channel::ActorId.index()]], 0.0);
}

// ── Properties ────────────────────────────────────────────────

proptest! {
    #[test]
    fn rate_turn_delta_clamps(
        angle in -5.0f32..5.0,
        max_rotation in -3.0f32..3.0,
        frame in 0u32..30,
        right in any::<bool>(),
    ) {
        let mut spec = ManeuverSpec::with_duration(30);
        spec.angle = angle;
        spec.max_rotation = max_rotation;
        let side = if right { Side::Right } else { Side::Left };
        let d = turn_delta(&spec, side, ManeuverFrame(frame));
        let raw = angle * frame as f32;
        let expected = if raw.abs() <= max_rotation.abs() {
            raw
        } else {
            raw.signum() * max_rotation.abs()
        };
        prop_assert!((d.heading - expected * side.sign()).abs() < 1e-4);
        prop_assert!(d.heading.abs() <= max_rotation.abs() + 1e-6);
    }

    #[test]
    fn triangle_is_zero_at_both_ends(angle in -3.0f32..3.0, total in 1u32..200) {
        prop_assert_eq!(triangular_angle(angle, total, ManeuverFrame(0)), 0.0);
        prop_assert_eq!(triangular_angle(angle, total, ManeuverFrame(total)), 0.0);
    }

    #[test]
    fn triangle_peaks_at_midpoint(angle in 0.0f32..3.0, half in 1u32..100, frame in 0u32..200) {
        let total = half * 2;
        let peak = triangular_angle(angle, total, ManeuverFrame(half));
        prop_assert!(triangular_angle(angle, total, ManeuverFrame(frame)) <= peak + 1e-4);
    }

    #[test]
    fn lateral_stays_in_band(z_offset in -100.0f32..100.0, frame in 0u32..1000, right in any::<bool>()) {
        let side = if right { Side::Right } else { Side::Left };
        let lateral = lane_shift_lateral(z_offset, side, ManeuverFrame(frame));
        prop_assert!((-0.5..=0.5).contains(&lateral));
    }

    #[test]
    fn stop_x_is_monotone_with_fixed_endpoints(
        initial_x in -100.0f32..100.0,
        distance in 0.0f32..50.0,
        total in 1u32..60,
    ) {
        let initial = Position::new(initial_x, 0.0, 0.0);
        let mut prev = f32::NEG_INFINITY;
        for frame in 0..=total {
            let x = stop_target(initial, distance, deceleration_factor(total, ManeuverFrame(frame))).x;
            prop_assert!(x >= prev - 1e-4);
            prev = x;
        }
        let start = stop_target(initial, distance, deceleration_factor(total, ManeuverFrame(0))).x;
        let end = stop_target(initial, distance, deceleration_factor(total, ManeuverFrame(total))).x;
        prop_assert_eq!(start, initial_x);
        prop_assert!((end - (initial_x + distance)).abs() < 1e-3);
    }

    #[test]
    fn effective_distance_respects_margin(
        nominal in 0.0f32..50.0,
        gap in 0.0f32..50.0,
        margin in 0.0f32..5.0,
    ) {
        let d = effective_stopping_distance(nominal, Some(gap), margin);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= nominal);
        if gap < nominal {
            prop_assert!(d <= (gap - margin).max(0.0));
        }
    }

    #[test]
    fn stopping_actor_never_passes_neighbor_margin(gap in 0.5f32..20.0, frames in 1u32..20) {
        let mut snap = following_pair(gap);
        let mut cache = ManeuverStateCache::new();
        let spec = stop_spec(frames);
        let margin = StopTuning::default().safety_margin;
        for frame in 0..=frames {
            run(&mut snap, &mut cache, 1, ManeuverKind::SuddenStop, &spec, frame).unwrap();
            let x = x_of(&snap, 1);
            prop_assert!(x <= StopTuning::default().stopping_distance + 1e-4);
            if gap < 10.0 {
                prop_assert!(x <= (gap - margin).max(0.0) + 1e-4);
            }
        }
    }
}
