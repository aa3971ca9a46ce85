//! The [`Profile`] trait, its outcome type, and kind dispatch.

use swerve_core::{ActorId, Channel, ManeuverError, ManeuverFrame, Position, SlotIndex};
use swerve_scene::SceneSnapshot;

use crate::context::ProfileContext;
use crate::kind::{ManeuverKind, Side};
use crate::lane_shift::LaneShift;
use crate::spec::ManeuverSpec;
use crate::sudden_stop::SuddenStop;
use crate::turn::Turn;

/// What a profile wrote.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Additive update of heading and position.
    Delta {
        /// Amount added to the heading channel.
        heading: f32,
        /// Amount added to each position channel.
        translation: Position,
        /// Whether a rate or offset limit was hit this frame.
        saturated: bool,
    },
    /// Absolute assignment of position (and optionally velocity).
    Target {
        /// The position written.
        position: Position,
        /// The velocity written, if any.
        velocity: Option<f32>,
        /// Effective stopping distance used for this frame.
        stopping_distance: f32,
        /// The vehicle ahead that shortened the stop, if any.
        constrained_by: Option<ActorId>,
    },
}

/// Result of one successful profile evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileOutcome {
    /// The actor evaluated.
    pub actor: ActorId,
    /// Slot the actor was resolved to.
    pub slot: SlotIndex,
    /// In-maneuver frame evaluated.
    pub frame: ManeuverFrame,
    /// Number of (time, batch) rows updated.
    pub rows_written: usize,
    /// What was written.
    pub effect: Effect,
}

/// One maneuver kind's per-frame update rule.
///
/// # Contract
///
/// - Deterministic given the spec, the frame, the snapshot layout, and
///   (for baseline kinds) the state cache.
/// - Reads and writes only `actor`'s rows, except for read-only
///   forward-neighbor queries.
/// - Returns [`ManeuverError::ActorNotFound`] without touching the
///   snapshot when the actor cannot be resolved.
pub trait Profile: Send + Sync {
    /// The kind this profile implements.
    fn kind(&self) -> ManeuverKind;

    /// Evaluate `frame` of `spec` for `actor` and write the result back.
    fn apply(
        &self,
        ctx: &mut ProfileContext<'_>,
        actor: ActorId,
        spec: &ManeuverSpec,
        frame: ManeuverFrame,
    ) -> Result<ProfileOutcome, ManeuverError>;
}

static LEFT_TURN: Turn = Turn { side: Side::Left };
static RIGHT_TURN: Turn = Turn { side: Side::Right };
static LEFT_LANE_SHIFT: LaneShift = LaneShift { side: Side::Left };
static RIGHT_LANE_SHIFT: LaneShift = LaneShift { side: Side::Right };
static SUDDEN_STOP: SuddenStop = SuddenStop;

/// The profile implementing `kind`.
pub fn profile_for(kind: ManeuverKind) -> &'static dyn Profile {
    match kind {
        ManeuverKind::LeftTurn => &LEFT_TURN,
        ManeuverKind::RightTurn => &RIGHT_TURN,
        ManeuverKind::LeftLaneShift => &LEFT_LANE_SHIFT,
        ManeuverKind::RightLaneShift => &RIGHT_LANE_SHIFT,
        ManeuverKind::SuddenStop => &SUDDEN_STOP,
    }
}

/// Dispatch one evaluation to the profile for `kind`.
pub fn apply_maneuver(
    ctx: &mut ProfileContext<'_>,
    actor: ActorId,
    kind: ManeuverKind,
    spec: &ManeuverSpec,
    frame: ManeuverFrame,
) -> Result<ProfileOutcome, ManeuverError> {
    profile_for(kind).apply(ctx, actor, spec, frame)
}

/// Add `heading` and `translation` to the actor's rows in `slot`.
///
/// Returns the number of rows updated.
pub(crate) fn write_delta(
    snapshot: &mut SceneSnapshot,
    slot: SlotIndex,
    actor: ActorId,
    heading: f32,
    translation: Position,
) -> usize {
    let rows = snapshot.offset_channel(slot, actor, Channel::Heading, heading);
    snapshot.offset_channel(slot, actor, Channel::X, translation.x);
    snapshot.offset_channel(slot, actor, Channel::Y, translation.y);
    snapshot.offset_channel(slot, actor, Channel::Z, translation.z);
    rows
}
