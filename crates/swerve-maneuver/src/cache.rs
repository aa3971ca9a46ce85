//! Per-actor maneuver baselines.
//!
//! The sudden-stop profile is defined relative to the pose an actor had
//! when its maneuver instance began. [`ManeuverStateCache`] captures that
//! pose on first use and hands it back on every later frame. The cache is
//! an explicit value owned by the caller and passed `&mut` into each
//! evaluation; its entries live for one maneuver instance and are evicted
//! by the driver when a new instance starts.

use indexmap::IndexMap;
use swerve_core::{ActorId, ManeuverError, Position};
use swerve_scene::{locate, SceneSnapshot};
use tracing::trace;

/// The pose captured at the first frame of a maneuver instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    /// Initial (x, y, z).
    pub position: Position,
    /// Initial velocity, when captured from a snapshot.
    ///
    /// `None` for baselines seeded through
    /// [`set`](ManeuverStateCache::set); profiles then leave the velocity
    /// channel alone.
    pub velocity: Option<f32>,
}

/// Actor id → [`Baseline`], in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ManeuverStateCache {
    entries: IndexMap<ActorId, Baseline>,
}

impl ManeuverStateCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached baseline, capturing it from `snapshot` if absent.
    ///
    /// Capture reads the actor's first matching row.
    ///
    /// # Errors
    ///
    /// [`ManeuverError::ActorNotFound`] when the actor is not cached and
    /// cannot be resolved. Nothing is stored in that case.
    pub fn get_or_init(
        &mut self,
        actor: ActorId,
        snapshot: &SceneSnapshot,
    ) -> Result<Baseline, ManeuverError> {
        if let Some(baseline) = self.entries.get(&actor) {
            return Ok(*baseline);
        }
        let not_found = ManeuverError::ActorNotFound { actor };
        let loc = locate(snapshot, actor).ok_or_else(|| not_found.clone())?;
        let position = snapshot.position_at(loc.row, loc.slot).ok_or(not_found)?;
        let baseline = Baseline {
            position,
            velocity: snapshot.velocity_at(loc.row, loc.slot),
        };
        trace!(actor = %actor, position = %position, "captured maneuver baseline");
        self.entries.insert(actor, baseline);
        Ok(baseline)
    }

    /// Override the baseline position for `actor`.
    ///
    /// Used when maneuvers are chained back-to-back and the next one should
    /// start from a known pose. Returns the previous entry.
    pub fn set(&mut self, actor: ActorId, position: Position) -> Option<Baseline> {
        self.seed(
            actor,
            Baseline {
                position,
                velocity: None,
            },
        )
    }

    /// Store a complete baseline for `actor`. Returns the previous entry.
    pub fn seed(&mut self, actor: ActorId, baseline: Baseline) -> Option<Baseline> {
        self.entries.insert(actor, baseline)
    }

    /// The cached baseline, if any.
    pub fn get(&self, actor: ActorId) -> Option<&Baseline> {
        self.entries.get(&actor)
    }

    /// Drop the entry for `actor`, preserving the order of the rest.
    pub fn evict(&mut self, actor: ActorId) -> Option<Baseline> {
        self.entries.shift_remove(&actor)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached actors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Baseline)> {
        self.entries.iter().map(|(id, b)| (*id, b))
    }
}
