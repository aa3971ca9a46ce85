//! Rate-limited turns.
//!
//! Two styles are supported, selected by [`ManeuverSpec::turn_style`]:
//!
//! - [`TurnStyle::RateAccumulated`]: the heading delta is `angle * frame`,
//!   saturating at `sign(angle) * |max_rotation|`. Translation is
//!   `offset * frame` on every axis and ignores saturation.
//! - [`TurnStyle::PerCall`]: each call adds the full `angle` and offsets.
//!   Once `|angle|` reaches `|max_rotation|` the heading advances by
//!   `max_rotation` instead and x-translation stops, while y and z keep
//!   moving.
//!
//! A right turn mirrors heading and z.

use swerve_core::{ActorId, ManeuverError, ManeuverFrame, Position};
use swerve_scene::locate;
use tracing::trace;

use crate::context::ProfileContext;
use crate::kind::{ManeuverKind, Side};
use crate::profile::{write_delta, Effect, Profile, ProfileOutcome};
use crate::spec::{ManeuverSpec, TurnStyle};

/// The additive update a turn produces for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnDelta {
    /// Heading increment.
    pub heading: f32,
    /// Position increment.
    pub translation: Position,
    /// Whether the rotation limit was hit.
    pub saturated: bool,
}

/// Compute the turn update for `frame` without touching any snapshot.
pub fn turn_delta(spec: &ManeuverSpec, side: Side, frame: ManeuverFrame) -> TurnDelta {
    let sign = side.sign();
    let limit = spec.max_rotation.abs();
    match spec.turn_style {
        TurnStyle::RateAccumulated => {
            let f = frame.as_f32();
            let raw = spec.angle * f;
            let saturated = raw.abs() > limit;
            let angle = if saturated { raw.signum() * limit } else { raw };
            TurnDelta {
                heading: angle * sign,
                translation: Position::new(
                    spec.x_offset * f,
                    spec.y_offset * f,
                    spec.z_offset * f * sign,
                ),
                saturated,
            }
        }
        TurnStyle::PerCall => {
            if spec.angle.abs() < limit {
                TurnDelta {
                    heading: spec.angle * sign,
                    translation: Position::new(spec.x_offset, spec.y_offset, spec.z_offset * sign),
                    saturated: false,
                }
            } else {
                TurnDelta {
                    heading: spec.max_rotation * sign,
                    translation: Position::new(0.0, spec.y_offset, spec.z_offset * sign),
                    saturated: true,
                }
            }
        }
    }
}

/// Evaluate a turn for `actor` and add the result to its rows.
pub fn apply_turn(
    ctx: &mut ProfileContext<'_>,
    actor: ActorId,
    spec: &ManeuverSpec,
    side: Side,
    frame: ManeuverFrame,
) -> Result<ProfileOutcome, ManeuverError> {
    let loc = locate(ctx.snapshot(), actor).ok_or(ManeuverError::ActorNotFound { actor })?;
    let delta = turn_delta(spec, side, frame);
    let rows_written = write_delta(
        ctx.snapshot_mut(),
        loc.slot,
        actor,
        delta.heading,
        delta.translation,
    );
    trace!(
        actor = %actor,
        frame = frame.0,
        heading = delta.heading,
        saturated = delta.saturated,
        "turn applied"
    );
    Ok(ProfileOutcome {
        actor,
        slot: loc.slot,
        frame,
        rows_written,
        effect: Effect::Delta {
            heading: delta.heading,
            translation: delta.translation,
            saturated: delta.saturated,
        },
    })
}

/// Left or right turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Turning side.
    pub side: Side,
}

impl Profile for Turn {
    fn kind(&self) -> ManeuverKind {
        match self.side {
            Side::Left => ManeuverKind::LeftTurn,
            Side::Right => ManeuverKind::RightTurn,
        }
    }

    fn apply(
        &self,
        ctx: &mut ProfileContext<'_>,
        actor: ActorId,
        spec: &ManeuverSpec,
        frame: ManeuverFrame,
    ) -> Result<ProfileOutcome, ManeuverError> {
        apply_turn(ctx, actor, spec, self.side, frame)
    }
}
