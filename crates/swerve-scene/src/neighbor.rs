//! Forward-neighbor query.
//!
//! Used by the sudden-stop profile so a braking actor never targets a stop
//! position beyond the vehicle ahead of it.

use swerve_core::{ActorId, SlotIndex};

use crate::locator::locate;
use crate::snapshot::SceneSnapshot;

/// Result of [`closest_forward`].
///
/// "No neighbor" is a valid, unconstrained result: `neighbor` is `None`
/// and `distance` is `+inf`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForwardNeighbor {
    /// The closest qualifying actor, if any.
    pub neighbor: Option<ActorId>,
    /// Longitudinal gap to that actor (`+inf` when absent).
    pub distance: f32,
}

impl ForwardNeighbor {
    /// The unconstrained result.
    pub const fn none() -> Self {
        Self {
            neighbor: None,
            distance: f32::INFINITY,
        }
    }

    /// Returns `true` if a qualifying neighbor was found.
    pub fn is_some(&self) -> bool {
        self.neighbor.is_some()
    }
}

/// Find the closest actor strictly ahead of `reference` along x.
///
/// Candidates are the other occupied slots of the reference's located row.
/// A candidate qualifies when `other_x - reference_x > 0` and
/// `|other_z - reference_z| <= z_tolerance`. Slots with non-finite
/// coordinates are skipped. Ties keep the lower slot index.
pub fn closest_forward(
    snapshot: &SceneSnapshot,
    reference: ActorId,
    z_tolerance: f32,
) -> ForwardNeighbor {
    let Some(loc) = locate(snapshot, reference) else {
        return ForwardNeighbor::none();
    };
    let Some(origin) = snapshot.position_at(loc.row, loc.slot) else {
        return ForwardNeighbor::none();
    };
    if !origin.x.is_finite() || !origin.z.is_finite() {
        return ForwardNeighbor::none();
    }

    let mut best = ForwardNeighbor::none();
    for slot in (0..snapshot.slot_count()).map(SlotIndex) {
        if slot == loc.slot {
            continue;
        }
        let other = snapshot.actor_at(loc.row, slot);
        if other.is_vacant() || other == reference {
            continue;
        }
        let Some(pos) = snapshot.position_at(loc.row, slot) else {
            continue;
        };
        if !pos.x.is_finite() || !pos.z.is_finite() {
            continue;
        }
        let dx = pos.x - origin.x;
        if dx <= 0.0 || (pos.z - origin.z).abs() > z_tolerance {
            continue;
        }
        if dx < best.distance {
            best = ForwardNeighbor {
                neighbor: Some(other),
                distance: dx,
            };
        }
    }
    best
}
