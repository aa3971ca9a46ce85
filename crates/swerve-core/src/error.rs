//! Error types for the Swerve framework.
//!
//! Organized by subsystem: maneuver evaluation (recoverable, per frame),
//! snapshot construction, and configuration resolution.

use std::error::Error;
use std::fmt;

use crate::id::{AbsoluteFrame, ActorId, SceneId};

/// Outcome of a maneuver evaluation that could not be applied.
///
/// Every variant is recoverable: the caller skips the actor for this frame
/// and keeps processing the rest of the batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManeuverError {
    /// The actor id is not present in the snapshot's identity channel.
    ActorNotFound {
        /// The id that failed to resolve.
        actor: ActorId,
    },
}

impl fmt::Display for ManeuverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActorNotFound { actor } => write!(f, "actor {actor} not found in snapshot"),
        }
    }
}

impl Error for ManeuverError {}

/// Errors from constructing or editing a scene snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The channel axis is shorter than the required layout.
    TooFewChannels {
        /// Number of channels present.
        found: usize,
        /// Number of channels required.
        required: usize,
    },
    /// A slot index lies outside the slot axis.
    SlotOutOfRange {
        /// The requested slot.
        slot: usize,
        /// Length of the slot axis.
        slots: usize,
    },
    /// Attempted to place the vacant sentinel as an actor.
    VacantActor,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewChannels { found, required } => {
                write!(f, "snapshot has {found} channels, at least {required} required")
            }
            Self::SlotOutOfRange { slot, slots } => {
                write!(f, "slot {slot} out of range (slots={slots})")
            }
            Self::VacantActor => write!(f, "actor id 0 is reserved for vacant slots"),
        }
    }
}

impl Error for SceneError {}

/// Errors detected while resolving maneuver configuration.
///
/// Raised by the configuration collaborator before any frame is
/// processed; profile functions never produce these.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The ending frame does not come after the starting frame.
    InvalidManeuverWindow {
        /// Configured starting frame.
        start: AbsoluteFrame,
        /// Configured (or derived) ending frame.
        end: AbsoluteFrame,
    },
    /// `frames_per_maneuver` is zero.
    ZeroDuration,
    /// A numeric parameter is NaN or infinite.
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
    /// Engine tuning violates an invariant.
    InvalidTuning {
        /// Description of the violated invariant.
        reason: String,
    },
    /// The requested scene is absent from the table.
    UnknownScene {
        /// The missing scene.
        scene: SceneId,
    },
    /// The table source could not be parsed.
    Parse {
        /// Parser message.
        reason: String,
    },
    /// A single maneuver entry failed validation.
    Maneuver {
        /// Scene containing the entry.
        scene: SceneId,
        /// Actor the maneuver targets.
        actor: ActorId,
        /// Maneuver kind name.
        kind: String,
        /// The underlying validation failure.
        reason: Box<ConfigError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidManeuverWindow { start, end } => {
                write!(f, "maneuver window [{start}, {end}) is empty")
            }
            Self::ZeroDuration => write!(f, "frames_per_maneuver must be at least 1"),
            Self::NonFiniteParameter { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::InvalidTuning { reason } => write!(f, "invalid engine tuning: {reason}"),
            Self::UnknownScene { scene } => write!(f, "scene '{scene}' not in table"),
            Self::Parse { reason } => write!(f, "table parse error: {reason}"),
            Self::Maneuver {
                scene,
                actor,
                kind,
                reason,
            } => write!(f, "scene '{scene}' actor {actor} {kind}: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maneuver { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}
