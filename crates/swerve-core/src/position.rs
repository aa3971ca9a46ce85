//! The [`Position`] triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor's (x, y, z) position.
///
/// `x` is the primary travel axis, `z` the lateral axis, `y` vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Longitudinal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
    /// Lateral coordinate.
    pub z: f32,
}

impl Position {
    /// Construct a position.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
