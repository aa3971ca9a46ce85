//! The batched scene snapshot.
//!
//! A [`SceneSnapshot`] owns an `Array4<f32>` indexed by
//! `(time, batch, slot, channel)`. The channel layout is fixed by
//! [`Channel`]; trailing channels beyond [`MIN_CHANNELS`] are carried
//! through untouched.
//!
//! # Write discipline
//!
//! Mutation goes through [`set_channel`](SceneSnapshot::set_channel) and
//! [`offset_channel`](SceneSnapshot::offset_channel), which address one
//! slot and only touch the rows of that slot whose identity channel equals
//! the given actor. The identity channel itself is never written by these
//! methods. Providers populate identities with
//! [`place_actor`](SceneSnapshot::place_actor).

use ndarray::{Array4, Axis};
use smallvec::SmallVec;
use swerve_core::{ActorId, Channel, Position, SceneError, SlotIndex, MIN_CHANNELS};

/// One (time-step, batch-element) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex {
    /// Index along the time axis.
    pub time: usize,
    /// Index along the batch axis.
    pub batch: usize,
}

impl RowIndex {
    /// Construct a row index.
    pub const fn new(time: usize, batch: usize) -> Self {
        Self { time, batch }
    }
}

/// Axis lengths of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotShape {
    /// Number of time steps.
    pub time: usize,
    /// Number of batch elements.
    pub batch: usize,
    /// Number of actor slots.
    pub slots: usize,
    /// Number of channels (at least [`MIN_CHANNELS`]).
    pub channels: usize,
}

/// Dense per-frame actor state for every batch element.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSnapshot {
    data: Array4<f32>,
}

impl SceneSnapshot {
    /// Wrap a provider array.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TooFewChannels`] if the last axis is shorter
    /// than [`MIN_CHANNELS`].
    pub fn new(data: Array4<f32>) -> Result<Self, SceneError> {
        let channels = data.dim().3;
        if channels < MIN_CHANNELS {
            return Err(SceneError::TooFewChannels {
                found: channels,
                required: MIN_CHANNELS,
            });
        }
        Ok(Self { data })
    }

    /// An all-vacant snapshot with the standard channel layout.
    pub fn zeros(time: usize, batch: usize, slots: usize) -> Self {
        Self {
            data: Array4::zeros((time, batch, slots, MIN_CHANNELS)),
        }
    }

    /// Hand the underlying array back to the provider.
    pub fn into_inner(self) -> Array4<f32> {
        self.data
    }

    /// Read-only view of the underlying array.
    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }

    /// Axis lengths.
    pub fn shape(&self) -> SnapshotShape {
        let (time, batch, slots, channels) = self.data.dim();
        SnapshotShape {
            time,
            batch,
            slots,
            channels,
        }
    }

    /// Number of actor slots.
    pub fn slot_count(&self) -> usize {
        self.data.dim().2
    }

    /// Every row in storage order (time-major, then batch).
    pub fn rows(&self) -> impl Iterator<Item = RowIndex> {
        let (time, batch, _, _) = self.data.dim();
        (0..time).flat_map(move |t| (0..batch).map(move |b| RowIndex::new(t, b)))
    }

    /// Raw channel value. Returns `None` when the index is out of bounds.
    pub fn get(&self, row: RowIndex, slot: SlotIndex, channel: Channel) -> Option<f32> {
        self.data
            .get((row.time, row.batch, slot.0, channel.index()))
            .copied()
    }

    /// Identity stored at a row/slot. Out-of-bounds reads as vacant.
    pub fn actor_at(&self, row: RowIndex, slot: SlotIndex) -> ActorId {
        self.get(row, slot, Channel::ActorId)
            .map(ActorId::from_channel)
            .unwrap_or(ActorId::VACANT)
    }

    /// Position stored at a row/slot.
    pub fn position_at(&self, row: RowIndex, slot: SlotIndex) -> Option<Position> {
        Some(Position::new(
            self.get(row, slot, Channel::X)?,
            self.get(row, slot, Channel::Y)?,
            self.get(row, slot, Channel::Z)?,
        ))
    }

    /// Heading stored at a row/slot.
    pub fn heading_at(&self, row: RowIndex, slot: SlotIndex) -> Option<f32> {
        self.get(row, slot, Channel::Heading)
    }

    /// Velocity stored at a row/slot.
    pub fn velocity_at(&self, row: RowIndex, slot: SlotIndex) -> Option<f32> {
        self.get(row, slot, Channel::Velocity)
    }

    /// Rows of `slot` currently held by `actor`, in storage order.
    pub fn actor_rows(&self, slot: SlotIndex, actor: ActorId) -> SmallVec<[RowIndex; 8]> {
        if actor.is_vacant() || slot.0 >= self.slot_count() {
            return SmallVec::new();
        }
        self.rows()
            .filter(|&row| self.actor_at(row, slot) == actor)
            .collect()
    }

    /// Assign `value` to `channel` on every row of `slot` held by `actor`.
    ///
    /// Returns the number of rows written. The identity channel is
    /// read-only here and yields 0.
    pub fn set_channel(
        &mut self,
        slot: SlotIndex,
        actor: ActorId,
        channel: Channel,
        value: f32,
    ) -> usize {
        self.write_rows(slot, actor, channel, |_| value)
    }

    /// Add `delta` to `channel` on every row of `slot` held by `actor`.
    ///
    /// Returns the number of rows written. The identity channel is
    /// read-only here and yields 0.
    pub fn offset_channel(
        &mut self,
        slot: SlotIndex,
        actor: ActorId,
        channel: Channel,
        delta: f32,
    ) -> usize {
        self.write_rows(slot, actor, channel, |v| v + delta)
    }

    fn write_rows(
        &mut self,
        slot: SlotIndex,
        actor: ActorId,
        channel: Channel,
        mut f: impl FnMut(f32) -> f32,
    ) -> usize {
        if !channel.is_writable() {
            return 0;
        }
        let rows = self.actor_rows(slot, actor);
        for row in &rows {
            let cell = &mut self.data[[row.time, row.batch, slot.0, channel.index()]];
            *cell = f(*cell);
        }
        rows.len()
    }

    /// Occupy `slot` with `actor` on every row.
    ///
    /// Overwrites whatever the slot held before. Intended for providers and
    /// fixtures; the maneuver engine never calls this.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SlotOutOfRange`] for a bad slot and
    /// [`SceneError::VacantActor`] for `ActorId(0)`.
    pub fn place_actor(
        &mut self,
        slot: SlotIndex,
        actor: ActorId,
        position: Position,
        heading: f32,
        velocity: f32,
    ) -> Result<(), SceneError> {
        if actor.is_vacant() {
            return Err(SceneError::VacantActor);
        }
        let slots = self.slot_count();
        if slot.0 >= slots {
            return Err(SceneError::SlotOutOfRange { slot: slot.0, slots });
        }
        // (time, batch, channel) view of the slot.
        let mut slot_view = self.data.index_axis_mut(Axis(2), slot.0);
        for mut cell in slot_view.lanes_mut(Axis(2)) {
            cell[Channel::X.index()] = position.x;
            cell[Channel::Y.index()] = position.y;
            cell[Channel::Z.index()] = position.z;
            cell[Channel::Heading.index()] = heading;
            cell[Channel::ActorId.index()] = actor.to_channel();
            cell[Channel::Velocity.index()] = velocity;
        }
        Ok(())
    }

    /// Vacate `slot` on every row, zeroing all of its channels.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::SlotOutOfRange`] for a bad slot.
    pub fn clear_slot(&mut self, slot: SlotIndex) -> Result<(), SceneError> {
        let slots = self.slot_count();
        if slot.0 >= slots {
            return Err(SceneError::SlotOutOfRange { slot: slot.0, slots });
        }
        self.data.index_axis_mut(Axis(2), slot.0).fill(0.0);
        Ok(())
    }
}
