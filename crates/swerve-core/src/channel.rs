//! Channel layout of the batched scene snapshot.
//!
//! The last axis of a snapshot holds per-actor state in a fixed order.
//! Providers may append extra channels after [`Channel::Velocity`]; the
//! engine never touches them.

use std::fmt;

/// Number of channels every snapshot must carry.
pub const MIN_CHANNELS: usize = 6;

/// One per-actor state channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Channel {
    /// Longitudinal position (primary travel axis).
    X = 0,
    /// Vertical position.
    Y = 1,
    /// Lateral position.
    Z = 2,
    /// Rotation about the vertical axis.
    Heading = 3,
    /// Actor identity; `0` marks an unoccupied slot.
    ActorId = 4,
    /// Scalar speed.
    Velocity = 5,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; MIN_CHANNELS] = [
        Channel::X,
        Channel::Y,
        Channel::Z,
        Channel::Heading,
        Channel::ActorId,
        Channel::Velocity,
    ];

    /// Index of this channel along the snapshot's last axis.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether maneuver profiles are allowed to write this channel.
    ///
    /// Identity is read-only for the engine.
    pub fn is_writable(self) -> bool {
        !matches!(self, Channel::ActorId)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::X => "x",
            Channel::Y => "y",
            Channel::Z => "z",
            Channel::Heading => "heading",
            Channel::ActorId => "actor_id",
            Channel::Velocity => "velocity",
        };
        f.write_str(name)
    }
}
