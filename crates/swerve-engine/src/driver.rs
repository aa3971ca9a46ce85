//! Per-maneuver state machine.
//!
//! ```text
//! Idle ──(frame enters window)──▶ Active { frame: 0 }
//! Active { k } ──(tick)──▶ Active { k + 1 }
//! Active ──(frame leaves window, or k > frames_per_maneuver)──▶ Completed
//! Idle ──(window already past)──▶ Completed
//! Completed ──(rearm)──▶ Idle
//! ```
//!
//! Entering `Active` drops the actor's cached baseline for kinds that use
//! one, so every instance measures from its own starting pose. A missing
//! actor is reported as [`TickOutcome::Skipped`] and the counter still
//! advances, keeping the instance aligned with the outer timeline.

use swerve_core::{AbsoluteFrame, ActorId, ManeuverError, ManeuverFrame, SceneId};
use swerve_maneuver::{
    apply_maneuver, ManeuverKind, ManeuverSpec, ManeuverStateCache, ManeuverWindow,
    ProfileContext, ProfileOutcome, StopTuning,
};
use swerve_scene::SceneSnapshot;
use tracing::{debug, warn};

use crate::table::ResolvedManeuver;

/// Lifecycle state of one maneuver instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Waiting for the window to open.
    Idle,
    /// Running; `frame` is the next in-maneuver frame to evaluate.
    Active {
        /// Next frame to evaluate.
        frame: ManeuverFrame,
    },
    /// Terminal for this instance.
    Completed,
}

/// What one [`ManeuverDriver::tick`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// The window has not opened yet.
    Idle,
    /// The profile ran and wrote to the snapshot.
    Applied {
        /// Frame evaluated.
        frame: ManeuverFrame,
        /// What the profile wrote.
        outcome: ProfileOutcome,
    },
    /// The actor could not be resolved; the snapshot is unchanged.
    Skipped {
        /// Frame that was skipped.
        frame: ManeuverFrame,
        /// Why.
        reason: ManeuverError,
    },
    /// The instance is finished.
    Completed,
}

impl TickOutcome {
    /// Returns `true` for [`TickOutcome::Applied`].
    pub fn is_applied(&self) -> bool {
        matches!(self, TickOutcome::Applied { .. })
    }

    /// Returns `true` for [`TickOutcome::Skipped`].
    pub fn is_skipped(&self) -> bool {
        matches!(self, TickOutcome::Skipped { .. })
    }
}

/// Drives one (scene, actor, kind) maneuver across absolute frames.
#[derive(Clone, Debug)]
pub struct ManeuverDriver {
    scene: SceneId,
    actor: ActorId,
    kind: ManeuverKind,
    spec: ManeuverSpec,
    window: ManeuverWindow,
    state: DriverState,
}

impl ManeuverDriver {
    /// A driver in [`DriverState::Idle`] for a resolved maneuver.
    pub fn new(maneuver: ResolvedManeuver) -> Self {
        let window = maneuver.spec.window();
        Self {
            scene: maneuver.scene,
            actor: maneuver.actor,
            kind: maneuver.kind,
            spec: maneuver.spec,
            window,
            state: DriverState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Scene this driver belongs to.
    pub fn scene(&self) -> &SceneId {
        &self.scene
    }

    /// Target actor.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Maneuver kind.
    pub fn kind(&self) -> ManeuverKind {
        self.kind
    }

    /// The specification being driven.
    pub fn spec(&self) -> &ManeuverSpec {
        &self.spec
    }

    /// The current instance's window.
    pub fn window(&self) -> ManeuverWindow {
        self.window
    }

    /// Returns `true` once the current instance is finished.
    pub fn is_completed(&self) -> bool {
        self.state == DriverState::Completed
    }

    /// Start a new instance over `window` with a fresh frame counter.
    pub fn rearm(&mut self, window: ManeuverWindow) {
        debug!(
            actor = %self.actor,
            kind = %self.kind,
            start = window.start.0,
            end = window.end.0,
            "maneuver rearmed"
        );
        self.window = window;
        self.state = DriverState::Idle;
    }

    /// Advance by one outer frame.
    ///
    /// Calls at most one profile. `snapshot` and `cache` are borrowed for
    /// this call only.
    pub fn tick(
        &mut self,
        now: AbsoluteFrame,
        snapshot: &mut SceneSnapshot,
        cache: &mut ManeuverStateCache,
        tuning: &StopTuning,
    ) -> TickOutcome {
        let frame = match self.state {
            DriverState::Completed => return TickOutcome::Completed,
            DriverState::Idle => {
                if self.window.contains(now) {
                    if self.kind.uses_baseline() {
                        cache.evict(self.actor);
                    }
                    debug!(
                        scene = %self.scene,
                        actor = %self.actor,
                        kind = %self.kind,
                        now = now.0,
                        "maneuver started"
                    );
                    ManeuverFrame::ZERO
                } else if self.window.is_past(now) {
                    return self.complete(now);
                } else {
                    return TickOutcome::Idle;
                }
            }
            DriverState::Active { frame } => {
                if !self.window.contains(now) || frame.0 > self.spec.frames_per_maneuver {
                    return self.complete(now);
                }
                frame
            }
        };

        self.state = DriverState::Active {
            frame: frame.next(),
        };
        let mut ctx = ProfileContext::new(snapshot, cache, tuning);
        match apply_maneuver(&mut ctx, self.actor, self.kind, &self.spec, frame) {
            Ok(outcome) => TickOutcome::Applied { frame, outcome },
            Err(reason) => {
                warn!(
                    actor = %self.actor,
                    kind = %self.kind,
                    frame = frame.0,
                    error = %reason,
                    "maneuver frame skipped"
                );
                TickOutcome::Skipped { frame, reason }
            }
        }
    }

    fn complete(&mut self, now: AbsoluteFrame) -> TickOutcome {
        debug!(
            actor = %self.actor,
            kind = %self.kind,
            now = now.0,
            "maneuver completed"
        );
        self.state = DriverState::Completed;
        TickOutcome::Completed
    }
}

// Compile-time assertion: drivers can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<ManeuverDriver>();
    }
};
