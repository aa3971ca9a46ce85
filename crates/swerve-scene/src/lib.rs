//! Batched scene snapshots and read-side queries for Swerve.
//!
//! [`SceneSnapshot`] wraps the dense (time, batch, slot, channel) array
//! handed over by the snapshot provider. Two queries are defined on it:
//!
//! - [`locate`]: resolve an [`ActorId`](swerve_core::ActorId) to the first
//!   matching slot in storage order.
//! - [`closest_forward`]: find the nearest occupied slot ahead of an actor
//!   along the primary travel axis, within a lateral tolerance band.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod locator;
pub mod neighbor;
pub mod snapshot;

pub use locator::{locate, slot_of, ActorLocation};
pub use neighbor::{closest_forward, ForwardNeighbor};
pub use snapshot::{RowIndex, SceneSnapshot, SnapshotShape};
