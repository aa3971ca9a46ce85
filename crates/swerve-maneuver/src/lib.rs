//! Maneuver profiles for the Swerve framework.
//!
//! A maneuver is a scripted kinematic perturbation applied to one actor
//! over a bounded frame window. This crate defines:
//!
//! - [`ManeuverSpec`] / [`ManeuverKind`]: the static configuration.
//! - One profile per kind ([`turn`], [`lane_shift`], [`sudden_stop`]),
//!   each a pure computation plus a write-back into the snapshot.
//! - [`ManeuverStateCache`]: per-actor baselines for profiles defined
//!   relative to a fixed starting position.
//! - The [`Profile`] trait and [`apply_maneuver`] dispatcher used by the
//!   engine.
//!
//! # Frame discipline
//!
//! Turn and lane-shift profiles are additive and encode the
//! frame-dependent total rather than a true per-frame increment: call
//! them exactly once per frame. Sudden stop writes absolute targets and is
//! idempotent for a given frame.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod context;
pub mod kind;
pub mod lane_shift;
pub mod profile;
pub mod spec;
pub mod sudden_stop;
pub mod turn;

pub use cache::{Baseline, ManeuverStateCache};
pub use context::ProfileContext;
pub use kind::{ManeuverKind, Side};
pub use lane_shift::{LaneShift, LANE_SHIFT_LATERAL_LIMIT};
pub use profile::{apply_maneuver, profile_for, Effect, Profile, ProfileOutcome};
pub use spec::{ManeuverSpec, ManeuverWindow, TurnStyle};
pub use sudden_stop::{StopTuning, SuddenStop};
pub use turn::Turn;
