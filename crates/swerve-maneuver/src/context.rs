//! Execution context passed to profiles.

use swerve_scene::SceneSnapshot;

use crate::cache::ManeuverStateCache;
use crate::sudden_stop::StopTuning;

/// Everything a profile may touch during one evaluation.
///
/// The snapshot and cache are borrowed for the duration of the call only;
/// nothing here outlives the frame.
pub struct ProfileContext<'a> {
    snapshot: &'a mut SceneSnapshot,
    cache: &'a mut ManeuverStateCache,
    tuning: &'a StopTuning,
}

impl<'a> ProfileContext<'a> {
    /// Construct a context. Typically called by the engine.
    pub fn new(
        snapshot: &'a mut SceneSnapshot,
        cache: &'a mut ManeuverStateCache,
        tuning: &'a StopTuning,
    ) -> Self {
        Self {
            snapshot,
            cache,
            tuning,
        }
    }

    /// Read-only snapshot access.
    pub fn snapshot(&self) -> &SceneSnapshot {
        self.snapshot
    }

    /// Mutable snapshot access.
    pub fn snapshot_mut(&mut self) -> &mut SceneSnapshot {
        self.snapshot
    }

    /// Split borrow of the cache and a read-only snapshot.
    pub fn cache_and_snapshot(&mut self) -> (&mut ManeuverStateCache, &SceneSnapshot) {
        (&mut *self.cache, &*self.snapshot)
    }

    /// Braking tuning.
    pub fn tuning(&self) -> &StopTuning {
        self.tuning
    }
}
