//! Strongly-typed identifiers and frame counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one actor within a scene.
///
/// Stored in the snapshot's `actor_id` channel as a float. `ActorId(0)` is
/// the sentinel for an unoccupied slot and never matches an identity lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u32);

impl ActorId {
    /// The unoccupied-slot sentinel.
    pub const VACANT: ActorId = ActorId(0);

    /// Returns `true` if this is the unoccupied-slot sentinel.
    pub fn is_vacant(self) -> bool {
        self.0 == 0
    }

    /// Decode an id from a snapshot channel value.
    ///
    /// Values are rounded to the nearest integer. Negative, non-finite, or
    /// out-of-range values decode to [`ActorId::VACANT`].
    pub fn from_channel(value: f32) -> Self {
        if !value.is_finite() || value < 0.5 || value > u32::MAX as f32 {
            return Self::VACANT;
        }
        Self(value.round() as u32)
    }

    /// Encode this id as a snapshot channel value.
    pub fn to_channel(self) -> f32 {
        self.0 as f32
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a scene in the configuration table (e.g. `"0006"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    /// Borrow the scene id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for SceneId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Index of an actor slot along the snapshot's slot axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(pub usize);

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based frame counter local to one maneuver instance.
///
/// Distinct from [`AbsoluteFrame`]: the driver translates the outer
/// timeline into this counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManeuverFrame(pub u32);

impl ManeuverFrame {
    /// The first frame of a maneuver instance.
    pub const ZERO: ManeuverFrame = ManeuverFrame(0);

    /// The following frame.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The frame as a float, for profile arithmetic.
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl fmt::Display for ManeuverFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ManeuverFrame {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Frame index on the outer scene timeline.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteFrame(pub u64);

impl fmt::Display for AbsoluteFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AbsoluteFrame {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
