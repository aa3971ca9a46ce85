//! Swerve: safety-critical maneuver synthesis for traffic scenes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! every Swerve sub-crate. For most users, adding `swerve` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swerve::prelude::*;
//!
//! // One actor at the origin, one vacant slot.
//! let mut snapshot = SceneSnapshot::zeros(1, 1, 2);
//! snapshot
//!     .place_actor(SlotIndex(0), ActorId(2), Position::default(), 0.0, 8.0)
//!     .unwrap();
//!
//! let mut runner = SceneRunner::from_table(
//!     &SceneTable::builtin(),
//!     &SceneId::from("0006"),
//!     EngineConfig::default(),
//! )
//! .unwrap();
//! let metrics = runner.run(0..30, &mut snapshot);
//! assert_eq!(metrics.applied, 35);
//! assert!(runner.is_finished());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swerve-core` | IDs, channel layout, `Position`, errors |
//! | [`scene`] | `swerve-scene` | Snapshot storage, actor locator, forward-neighbor query |
//! | [`maneuver`] | `swerve-maneuver` | Specs, profiles, state cache |
//! | [`engine`] | `swerve-engine` | Driver state machine, scene table, runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, channel layout, and error taxonomy (`swerve-core`).
pub use swerve_core as types;

/// Batched scene snapshots and read-only queries (`swerve-scene`).
///
/// [`scene::locate`] resolves an actor to its slot;
/// [`scene::closest_forward`] finds the vehicle ahead.
pub use swerve_scene as scene;

/// Maneuver specifications and profiles (`swerve-maneuver`).
///
/// The [`maneuver::Profile`] trait has one implementation per
/// [`maneuver::ManeuverKind`].
pub use swerve_maneuver as maneuver;

/// Driver state machine and scene runner (`swerve-engine`).
pub use swerve_engine as engine;

/// Common imports for typical Swerve usage.
///
/// ```rust
/// use swerve::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use swerve_core::{
        AbsoluteFrame, ActorId, Channel, ManeuverFrame, Position, SceneId, SlotIndex,
    };

    // Errors
    pub use swerve_core::{ConfigError, ManeuverError, SceneError};

    // Scene
    pub use swerve_scene::{closest_forward, locate, ForwardNeighbor, SceneSnapshot};

    // Maneuvers
    pub use swerve_maneuver::{
        apply_maneuver, Effect, ManeuverKind, ManeuverSpec, ManeuverStateCache, Profile,
        ProfileContext, ProfileOutcome, StopTuning, TurnStyle,
    };

    // Engine
    pub use swerve_engine::{
        EngineConfig, ManeuverDriver, RunMetrics, SceneRunner, SceneTable, TickOutcome,
    };
}
