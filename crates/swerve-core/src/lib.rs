//! Core types for the Swerve maneuver synthesis framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: actor and
//! scene identifiers, frame counters, the snapshot channel layout, the
//! [`Position`] triple, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod error;
pub mod id;
pub mod position;

pub use channel::{Channel, MIN_CHANNELS};
pub use error::{ConfigError, ManeuverError, SceneError};
pub use id::{AbsoluteFrame, ActorId, ManeuverFrame, SceneId, SlotIndex};
pub use position::Position;
