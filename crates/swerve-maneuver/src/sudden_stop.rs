//! Sudden stop: abrupt braking toward an absolute target.
//!
//! The target is measured from the baseline captured in the
//! [`ManeuverStateCache`](crate::ManeuverStateCache) on the first frame of
//! the instance. Each frame writes
//!
//! ```text
//! x = initial_x + d * (1 - factor)
//! y = initial_y
//! z = initial_z
//! factor = max(0, (T - frame) / T)
//! ```
//!
//! where `d` is the nominal stopping distance, shortened to
//! `gap - safety_margin` when a vehicle ahead sits closer than the nominal
//! distance. The gap is measured from the baseline, so repeating a frame
//! with an unchanged layout writes the same values.
//!
//! The default window `[start, start + T)` never runs frame `T`, so the
//! last write leaves `factor = 1 / T`: the actor ends `d / T` short of the
//! full stopping distance, still moving at `v0 / T`. Set
//! `maneuver_ending_frame` to `start + T + 1` or later to reach a standstill.

use swerve_core::{ActorId, Channel, ConfigError, ManeuverError, ManeuverFrame, Position};
use swerve_scene::{closest_forward, locate};
use tracing::{debug, trace};

use crate::context::ProfileContext;
use crate::kind::ManeuverKind;
use crate::profile::{Effect, Profile, ProfileOutcome};
use crate::spec::ManeuverSpec;

/// Braking parameters shared by every sudden-stop instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopTuning {
    /// Nominal stopping distance along x.
    pub stopping_distance: f32,
    /// Gap kept to the vehicle ahead.
    pub safety_margin: f32,
    /// Lateral band for the forward-neighbor query.
    pub z_tolerance: f32,
}

impl Default for StopTuning {
    fn default() -> Self {
        Self {
            stopping_distance: 10.0,
            safety_margin: 2.0,
            z_tolerance: 0.3,
        }
    }
}

impl StopTuning {
    /// Reject negative or non-finite parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("stopping_distance", self.stopping_distance),
            ("safety_margin", self.safety_margin),
            ("z_tolerance", self.z_tolerance),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::InvalidTuning {
                    reason: format!("{name} must be non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Remaining speed fraction at `frame`: 1 at the start, 0 at the end.
pub fn deceleration_factor(total_frames: u32, frame: ManeuverFrame) -> f32 {
    if total_frames == 0 {
        return 0.0;
    }
    let t = total_frames as f32;
    ((t - frame.as_f32()) / t).max(0.0)
}

/// Stopping distance after accounting for the vehicle ahead.
///
/// `gap` is the distance from the baseline to the forward neighbor, if
/// any. The result is never negative.
pub fn effective_stopping_distance(nominal: f32, gap: Option<f32>, safety_margin: f32) -> f32 {
    let d = match gap {
        Some(gap) if gap < nominal => gap - safety_margin,
        _ => nominal,
    };
    d.max(0.0)
}

/// Absolute stop target for a baseline, distance, and factor.
pub fn stop_target(initial: Position, stopping_distance: f32, factor: f32) -> Position {
    Position::new(
        initial.x + stopping_distance * (1.0 - factor),
        initial.y,
        initial.z,
    )
}

/// Evaluate a sudden stop for `actor` and write the absolute target.
pub fn apply_sudden_stop(
    ctx: &mut ProfileContext<'_>,
    actor: ActorId,
    spec: &ManeuverSpec,
    frame: ManeuverFrame,
) -> Result<ProfileOutcome, ManeuverError> {
    let not_found = ManeuverError::ActorNotFound { actor };
    let loc = locate(ctx.snapshot(), actor).ok_or_else(|| not_found.clone())?;
    let tuning = *ctx.tuning();

    let (cache, snapshot) = ctx.cache_and_snapshot();
    let baseline = cache.get_or_init(actor, snapshot)?;
    let current = snapshot.position_at(loc.row, loc.slot).ok_or(not_found)?;

    let hit = closest_forward(snapshot, actor, tuning.z_tolerance);
    let gap = hit
        .neighbor
        .map(|_| hit.distance + (current.x - baseline.position.x));
    let stopping_distance =
        effective_stopping_distance(tuning.stopping_distance, gap, tuning.safety_margin);
    let constrained_by = match gap {
        Some(gap) if gap < tuning.stopping_distance => hit.neighbor,
        _ => None,
    };
    if let (Some(neighbor), Some(gap)) = (constrained_by, gap) {
        debug!(
            actor = %actor,
            neighbor = %neighbor,
            gap,
            stopping_distance,
            "stop shortened by vehicle ahead"
        );
    }

    let factor = deceleration_factor(spec.frames_per_maneuver, frame);
    let target = stop_target(baseline.position, stopping_distance, factor);
    let velocity = baseline.velocity.map(|v| v * factor);

    let snapshot = ctx.snapshot_mut();
    let rows_written = snapshot.set_channel(loc.slot, actor, Channel::X, target.x);
    snapshot.set_channel(loc.slot, actor, Channel::Y, target.y);
    snapshot.set_channel(loc.slot, actor, Channel::Z, target.z);
    if let Some(v) = velocity {
        snapshot.set_channel(loc.slot, actor, Channel::Velocity, v);
    }
    trace!(actor = %actor, frame = frame.0, x = target.x, factor, "sudden stop applied");

    Ok(ProfileOutcome {
        actor,
        slot: loc.slot,
        frame,
        rows_written,
        effect: Effect::Target {
            position: target,
            velocity,
            stopping_distance,
            constrained_by,
        },
    })
}

/// Abrupt braking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuddenStop;

impl Profile for SuddenStop {
    fn kind(&self) -> ManeuverKind {
        ManeuverKind::SuddenStop
    }

    fn apply(
        &self,
        ctx: &mut ProfileContext<'_>,
        actor: ActorId,
        spec: &ManeuverSpec,
        frame: ManeuverFrame,
    ) -> Result<ProfileOutcome, ManeuverError> {
        apply_sudden_stop(ctx, actor, spec, frame)
    }
}
