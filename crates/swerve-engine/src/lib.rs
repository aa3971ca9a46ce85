//! Maneuver engine for Swerve.
//!
//! Turns resolved maneuver specifications into per-frame profile calls.
//! [`ManeuverDriver`] is the state machine for one (scene, actor, kind)
//! instance; [`SceneRunner`] ticks every driver of a scene against one
//! snapshot per frame and keeps the shared
//! [`ManeuverStateCache`](swerve_maneuver::ManeuverStateCache).
//! [`SceneTable`] is the serde-backed configuration table the runner is
//! built from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod metrics;
pub mod runner;
pub mod table;

pub use config::EngineConfig;
pub use driver::{DriverState, ManeuverDriver, TickOutcome};
pub use metrics::RunMetrics;
pub use runner::{DriverReport, FrameReport, SceneRunner, SnapshotProvider};
pub use table::{ResolvedManeuver, SceneTable};
