//! Run counters for the scene runner.
//!
//! [`RunMetrics`] accumulates across every [`step`](crate::SceneRunner::step)
//! of a runner; each [`FrameReport`](crate::FrameReport) also carries the
//! counts for its own frame.

/// Tick counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Outer frames processed.
    pub frames: u64,
    /// Profile calls that wrote to a snapshot.
    pub applied: u64,
    /// Profile calls skipped because the actor was missing.
    pub skipped: u64,
    /// Maneuver instances that reached `Completed`.
    pub completed: u64,
    /// Frames the snapshot provider had no snapshot for.
    pub missing_snapshots: u64,
}

impl RunMetrics {
    /// Add `other`'s counts to `self`.
    pub fn absorb(&mut self, other: &RunMetrics) {
        self.frames += other.frames;
        self.applied += other.applied;
        self.skipped += other.skipped;
        self.completed += other.completed;
        self.missing_snapshots += other.missing_snapshots;
    }
}
