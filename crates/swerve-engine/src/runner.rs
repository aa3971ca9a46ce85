//! Outer frame loop over every maneuver of one scene.
//!
//! [`SceneRunner`] owns one [`ManeuverDriver`] per resolved maneuver and
//! the [`ManeuverStateCache`] they share. Each
//! [`step()`](SceneRunner::step) ticks every driver once, in resolution
//! order, against the caller's snapshot. Skipped actors are reported and
//! never abort the frame.

use std::ops::Range;

use smallvec::SmallVec;
use swerve_core::{AbsoluteFrame, ActorId, ConfigError, SceneId};
use swerve_maneuver::{ManeuverKind, ManeuverStateCache};
use swerve_scene::SceneSnapshot;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::driver::{ManeuverDriver, TickOutcome};
use crate::metrics::RunMetrics;
use crate::table::{ResolvedManeuver, SceneTable};

/// Supplies the snapshot for each outer frame.
pub trait SnapshotProvider {
    /// The snapshot to mutate for `frame`, or `None` if there is none.
    fn snapshot_mut(&mut self, frame: AbsoluteFrame) -> Option<&mut SceneSnapshot>;
}

/// A single snapshot evolved in place across every frame.
impl SnapshotProvider for SceneSnapshot {
    fn snapshot_mut(&mut self, _frame: AbsoluteFrame) -> Option<&mut SceneSnapshot> {
        Some(self)
    }
}

/// One snapshot per frame, indexed by absolute frame.
impl SnapshotProvider for Vec<SceneSnapshot> {
    fn snapshot_mut(&mut self, frame: AbsoluteFrame) -> Option<&mut SceneSnapshot> {
        let index = usize::try_from(frame.0).ok()?;
        self.get_mut(index)
    }
}

/// One driver's result for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverReport {
    /// Target actor.
    pub actor: ActorId,
    /// Maneuver kind.
    pub kind: ManeuverKind,
    /// What the tick did.
    pub outcome: TickOutcome,
}

/// Everything that happened in one [`SceneRunner::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// The outer frame.
    pub frame: AbsoluteFrame,
    /// One entry per driver, in resolution order.
    pub drivers: SmallVec<[DriverReport; 4]>,
    /// Counts for this frame only.
    pub metrics: RunMetrics,
}

/// Runs every maneuver of a scene frame by frame.
pub struct SceneRunner {
    drivers: Vec<ManeuverDriver>,
    cache: ManeuverStateCache,
    config: EngineConfig,
    metrics: RunMetrics,
}

impl SceneRunner {
    /// Build a runner over already-resolved maneuvers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the engine config or any spec is invalid.
    pub fn new(resolved: Vec<ResolvedManeuver>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        for m in &resolved {
            m.spec.validate().map_err(|reason| ConfigError::Maneuver {
                scene: m.scene.clone(),
                actor: m.actor,
                kind: m.kind.name().to_string(),
                reason: Box::new(reason),
            })?;
        }
        Ok(Self {
            drivers: resolved.into_iter().map(ManeuverDriver::new).collect(),
            cache: ManeuverStateCache::new(),
            config,
            metrics: RunMetrics::default(),
        })
    }

    /// Resolve `scene` from `table` and build a runner for it.
    pub fn from_table(
        table: &SceneTable,
        scene: &SceneId,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(table.resolve(scene)?, config)
    }

    /// Tick every driver once at `now`.
    pub fn step(&mut self, now: AbsoluteFrame, snapshot: &mut SceneSnapshot) -> FrameReport {
        let mut report = FrameReport {
            frame: now,
            drivers: SmallVec::new(),
            metrics: RunMetrics {
                frames: 1,
                ..RunMetrics::default()
            },
        };
        for driver in &mut self.drivers {
            let was_completed = driver.is_completed();
            let outcome = driver.tick(now, snapshot, &mut self.cache, &self.config.stop);
            match &outcome {
                TickOutcome::Applied { .. } => report.metrics.applied += 1,
                TickOutcome::Skipped { .. } => report.metrics.skipped += 1,
                TickOutcome::Completed if !was_completed => report.metrics.completed += 1,
                TickOutcome::Completed | TickOutcome::Idle => {}
            }
            report.drivers.push(DriverReport {
                actor: driver.actor(),
                kind: driver.kind(),
                outcome,
            });
        }
        self.metrics.absorb(&report.metrics);
        report
    }

    /// Step through `frames`, taking each frame's snapshot from `provider`.
    ///
    /// Frames the provider cannot supply are counted and skipped; drivers
    /// are not ticked for them. Returns the counts for this run.
    pub fn run(
        &mut self,
        frames: Range<u64>,
        provider: &mut impl SnapshotProvider,
    ) -> RunMetrics {
        let mut total = RunMetrics::default();
        for frame in frames.map(AbsoluteFrame) {
            let Some(snapshot) = provider.snapshot_mut(frame) else {
                warn!(frame = frame.0, "no snapshot for frame");
                total.missing_snapshots += 1;
                self.metrics.missing_snapshots += 1;
                continue;
            };
            let report = self.step(frame, snapshot);
            total.absorb(&report.metrics);
        }
        debug!(
            frames = total.frames,
            applied = total.applied,
            skipped = total.skipped,
            completed = total.completed,
            "run finished"
        );
        total
    }

    /// Returns `true` once every driver is completed.
    pub fn is_finished(&self) -> bool {
        self.drivers.iter().all(ManeuverDriver::is_completed)
    }

    /// The drivers, in resolution order.
    pub fn drivers(&self) -> &[ManeuverDriver] {
        &self.drivers
    }

    /// Mutable driver access, e.g. to [`rearm`](ManeuverDriver::rearm).
    pub fn drivers_mut(&mut self) -> &mut [ManeuverDriver] {
        &mut self.drivers
    }

    /// The shared baseline cache.
    pub fn cache(&self) -> &ManeuverStateCache {
        &self.cache
    }

    /// Mutable cache access, e.g. to seed baselines for chained maneuvers.
    pub fn cache_mut(&mut self) -> &mut ManeuverStateCache {
        &mut self.cache
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters accumulated since construction.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}

// Compile-time assertion: runners can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SceneRunner>();
    }
};
