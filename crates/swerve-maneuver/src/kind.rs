//! Maneuver kinds and turning side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side a turn or lane shift goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Positive heading / positive lateral direction.
    Left,
    /// Negative heading / negative lateral direction.
    Right,
}

impl Side {
    /// `+1.0` for left, `-1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// The maneuver a specification describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManeuverKind {
    /// Rate-limited turn toward positive heading.
    LeftTurn,
    /// Rate-limited turn toward negative heading.
    RightTurn,
    /// Triangular heading profile with bounded lateral drift to the left.
    LeftLaneShift,
    /// Triangular heading profile with bounded lateral drift to the right.
    RightLaneShift,
    /// Abrupt braking toward a fixed target, shortened by the vehicle ahead.
    SuddenStop,
}

impl ManeuverKind {
    /// Every kind, in declaration order.
    pub const ALL: [ManeuverKind; 5] = [
        ManeuverKind::LeftTurn,
        ManeuverKind::RightTurn,
        ManeuverKind::LeftLaneShift,
        ManeuverKind::RightLaneShift,
        ManeuverKind::SuddenStop,
    ];

    /// Configuration-table name (`left_turn`, `sudden_stop`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ManeuverKind::LeftTurn => "left_turn",
            ManeuverKind::RightTurn => "right_turn",
            ManeuverKind::LeftLaneShift => "left_lane_shift",
            ManeuverKind::RightLaneShift => "right_lane_shift",
            ManeuverKind::SuddenStop => "sudden_stop",
        }
    }

    /// Whether the profile is defined relative to a cached baseline.
    ///
    /// The driver drops the actor's cache entry when a new instance of
    /// such a kind starts.
    pub fn uses_baseline(self) -> bool {
        matches!(self, ManeuverKind::SuddenStop)
    }

    /// The side for directional kinds.
    pub fn side(self) -> Option<Side> {
        match self {
            ManeuverKind::LeftTurn | ManeuverKind::LeftLaneShift => Some(Side::Left),
            ManeuverKind::RightTurn | ManeuverKind::RightLaneShift => Some(Side::Right),
            ManeuverKind::SuddenStop => None,
        }
    }
}

impl fmt::Display for ManeuverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
