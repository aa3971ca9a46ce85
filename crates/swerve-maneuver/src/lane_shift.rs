//! Lane shifts: a triangular heading profile with bounded lateral drift.

use swerve_core::{ActorId, ManeuverError, ManeuverFrame, Position};
use swerve_scene::locate;
use tracing::trace;

use crate::context::ProfileContext;
use crate::kind::{ManeuverKind, Side};
use crate::profile::{write_delta, Effect, Profile, ProfileOutcome};
use crate::spec::ManeuverSpec;

/// Largest lateral offset a lane shift applies in one call, either side.
pub const LANE_SHIFT_LATERAL_LIMIT: f32 = 0.5;

/// Triangular angle before clamping.
///
/// Rises as `angle * frame` up to `total / 2`, falls as
/// `angle * (total - frame)` back to zero at `total`, and is zero past
/// the end.
pub fn triangular_angle(angle: f32, total_frames: u32, frame: ManeuverFrame) -> f32 {
    let t = total_frames as f32;
    let f = frame.as_f32();
    if f < t / 2.0 {
        angle * f
    } else if f <= t {
        angle * (t - f)
    } else {
        0.0
    }
}

/// Signed, clamped heading increment for `frame`.
///
/// A NaN `max_rotation` leaves the increment unclamped.
pub fn lane_shift_angle(spec: &ManeuverSpec, side: Side, frame: ManeuverFrame) -> f32 {
    let limit = spec.max_rotation.abs();
    let raw = triangular_angle(spec.angle, spec.frames_per_maneuver, frame) * side.sign();
    raw.max(-limit).min(limit)
}

/// Signed lateral offset for `frame`, within
/// `±`[`LANE_SHIFT_LATERAL_LIMIT`].
pub fn lane_shift_lateral(z_offset: f32, side: Side, frame: ManeuverFrame) -> f32 {
    let raw = z_offset * frame.as_f32() * side.sign();
    if raw < 0.0 {
        raw.max(-LANE_SHIFT_LATERAL_LIMIT)
    } else {
        raw.min(LANE_SHIFT_LATERAL_LIMIT)
    }
}

/// Evaluate a lane shift for `actor` and add the result to its rows.
pub fn apply_lane_shift(
    ctx: &mut ProfileContext<'_>,
    actor: ActorId,
    spec: &ManeuverSpec,
    side: Side,
    frame: ManeuverFrame,
) -> Result<ProfileOutcome, ManeuverError> {
    let loc = locate(ctx.snapshot(), actor).ok_or(ManeuverError::ActorNotFound { actor })?;

    let raw_angle = triangular_angle(spec.angle, spec.frames_per_maneuver, frame);
    let heading = lane_shift_angle(spec, side, frame);
    let raw_lateral = spec.z_offset * frame.as_f32();
    let lateral = lane_shift_lateral(spec.z_offset, side, frame);
    let saturated =
        raw_angle.abs() > spec.max_rotation.abs() || raw_lateral.abs() > LANE_SHIFT_LATERAL_LIMIT;

    let translation = Position::new(0.0, 0.0, lateral);
    let rows_written = write_delta(ctx.snapshot_mut(), loc.slot, actor, heading, translation);
    trace!(actor = %actor, frame = frame.0, heading, lateral, "lane shift applied");

    Ok(ProfileOutcome {
        actor,
        slot: loc.slot,
        frame,
        rows_written,
        effect: Effect::Delta {
            heading,
            translation,
            saturated,
        },
    })
}

/// Left or right lane shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneShift {
    /// Shift direction.
    pub side: Side,
}

impl Profile for LaneShift {
    fn kind(&self) -> ManeuverKind {
        match self.side {
            Side::Left => ManeuverKind::LeftLaneShift,
            Side::Right => ManeuverKind::RightLaneShift,
        }
    }

    fn apply(
        &self,
        ctx: &mut ProfileContext<'_>,
        actor: ActorId,
        spec: &ManeuverSpec,
        frame: ManeuverFrame,
    ) -> Result<ProfileOutcome, ManeuverError> {
        apply_lane_shift(ctx, actor, spec, self.side, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_endpoints_and_peak() {
        assert_eq!(triangular_angle(0.7, 10, ManeuverFrame(0)), 0.0);
        assert_eq!(triangular_angle(0.7, 10, ManeuverFrame(10)), 0.0);
        assert!((triangular_angle(0.7, 10, ManeuverFrame(5)) - 3.5).abs() < 1e-6);
        assert!((triangular_angle(0.7, 10, ManeuverFrame(4)) - 2.8).abs() < 1e-6);
        assert!((triangular_angle(0.7, 10, ManeuverFrame(6)) - 2.8).abs() < 1e-6);
    }

    #[test]
    fn past_the_end_is_zero() {
        assert_eq!(triangular_angle(0.7, 10, ManeuverFrame(11)), 0.0);
    }

    #[test]
    fn odd_duration_peaks_on_the_falling_edge() {
        // T = 5: frames 0..=2 rise (2 < 2.5), frame 3 falls to 2 * angle.
        assert_eq!(triangular_angle(1.0, 5, ManeuverFrame(2)), 2.0);
        assert_eq!(triangular_angle(1.0, 5, ManeuverFrame(3)), 2.0);
    }

    #[test]
    fn angle_clamps_to_max_rotation_magnitude() {
        let mut spec = ManeuverSpec::with_duration(10);
        spec.angle = 0.7;
        spec.max_rotation = -0.6;
        assert_eq!(lane_shift_angle(&spec, Side::Left, ManeuverFrame(5)), 0.6);
        assert_eq!(lane_shift_angle(&spec, Side::Right, ManeuverFrame(5)), -0.6);
    }

    #[test]
    fn nan_max_rotation_does_not_panic() {
        let mut spec = ManeuverSpec::with_duration(10);
        spec.angle = 0.7;
        spec.max_rotation = f32::NAN;
        assert!((lane_shift_angle(&spec, Side::Left, ManeuverFrame(2)) - 1.4).abs() < 1e-6);
        assert!((lane_shift_angle(&spec, Side::Right, ManeuverFrame(2)) + 1.4).abs() < 1e-6);
    }

    #[test]
    fn lateral_clamps_at_half() {
        assert_eq!(lane_shift_lateral(0.6, Side::Left, ManeuverFrame(10)), 0.5);
        assert_eq!(lane_shift_lateral(0.6, Side::Right, ManeuverFrame(10)), -0.5);
        assert_eq!(lane_shift_lateral(-0.6, Side::Left, ManeuverFrame(10)), -0.5);
        assert!((lane_shift_lateral(0.1, Side::Left, ManeuverFrame(3)) - 0.3).abs() < 1e-6);
    }
}
