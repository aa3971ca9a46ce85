//! Reusable scene fixtures.
//!
//! - [`SceneBuilder`]: place actors slot by slot, replicated across rows.
//! - [`two_actor_scene`]: actors 1 and 2 one unit apart in the same lane.
//! - [`following_pair`]: a leader at a configurable gap ahead of actor 1.
//! - [`lone_actor`]: a single actor, no neighbors.
//! - [`highway_scene`]: seeded multi-lane traffic.

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use swerve_core::{ActorId, Position, SlotIndex};
use swerve_scene::SceneSnapshot;

/// Absolute tolerance used by [`assert_close`].
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Panic unless `actual` is within [`DEFAULT_TOLERANCE`] of `expected`.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= DEFAULT_TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// Builds a [`SceneSnapshot`] by placing actors in consecutive slots.
///
/// Every actor is replicated across all (time, batch) rows. Extra vacant
/// slots can be requested with [`spare_slots`](SceneBuilder::spare_slots).
pub struct SceneBuilder {
    time: usize,
    batch: usize,
    spare: usize,
    actors: Vec<(ActorId, Position, f32, f32)>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            time: 1,
            batch: 1,
            spare: 0,
            actors: Vec::new(),
        }
    }

    /// Set the time and batch axis lengths.
    pub fn rows(mut self, time: usize, batch: usize) -> Self {
        self.time = time;
        self.batch = batch;
        self
    }

    /// Append `n` vacant slots after the placed actors.
    pub fn spare_slots(mut self, n: usize) -> Self {
        self.spare = n;
        self
    }

    /// Place an actor at (x, 0, z) with zero heading and velocity.
    pub fn actor(self, id: u32, x: f32, z: f32) -> Self {
        self.actor_with(id, Position::new(x, 0.0, z), 0.0, 0.0)
    }

    /// Place an actor with full initial state.
    pub fn actor_with(mut self, id: u32, position: Position, heading: f32, velocity: f32) -> Self {
        self.actors.push((ActorId(id), position, heading, velocity));
        self
    }

    pub fn build(self) -> SceneSnapshot {
        let mut snap = SceneSnapshot::zeros(self.time, self.batch, self.actors.len() + self.spare);
        for (slot, (id, pos, heading, velocity)) in self.actors.into_iter().enumerate() {
            snap.place_actor(SlotIndex(slot), id, pos, heading, velocity)
                .expect("builder slots are in range and ids are non-zero");
        }
        snap
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Actor 1 at x=0 and actor 2 at x=1, both at z=0.
pub fn two_actor_scene() -> SceneSnapshot {
    SceneBuilder::new().actor(1, 0.0, 0.0).actor(2, 1.0, 0.0).build()
}

/// Actor 1 at the origin moving at 10 units/frame, actor 2 `gap` ahead.
pub fn following_pair(gap: f32) -> SceneSnapshot {
    SceneBuilder::new()
        .actor_with(1, Position::new(0.0, 0.0, 0.0), 0.0, 10.0)
        .actor_with(2, Position::new(gap, 0.0, 0.0), 0.0, 10.0)
        .build()
}

/// Actor 1 alone at `position`, with one spare slot.
pub fn lone_actor(position: Position) -> SceneSnapshot {
    SceneBuilder::new()
        .actor_with(1, position, 0.0, 5.0)
        .spare_slots(1)
        .build()
}

/// Seeded multi-lane traffic.
///
/// Lanes are 3.5 units apart along z. Each lane holds `per_lane` actors
/// with random gaps of 4 to 30 units along x. Ids start at 1 and run
/// lane-major. The same seed always yields the same scene.
pub fn highway_scene(seed: u64, lanes: usize, per_lane: usize) -> SceneSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = SceneBuilder::new().spare_slots(2);
    let mut next_id = 1u32;
    for lane in 0..lanes {
        let z = lane as f32 * 3.5;
        let mut x = rng.random_range(0.0f32..10.0);
        for _ in 0..per_lane {
            let velocity = rng.random_range(5.0f32..15.0);
            builder = builder.actor_with(next_id, Position::new(x, 0.0, z), 0.0, velocity);
            next_id += 1;
            x += rng.random_range(4.0f32..30.0);
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_scene::locate;

    #[test]
    fn builder_places_in_order() {
        let snap = SceneBuilder::new()
            .rows(2, 3)
            .actor(4, 1.0, 0.0)
            .actor(9, 2.0, 0.0)
            .spare_slots(1)
            .build();
        assert_eq!(snap.slot_count(), 3);
        assert_eq!(locate(&snap, ActorId(9)).unwrap().slot, SlotIndex(1));
        assert_eq!(snap.shape().time, 2);
        assert_eq!(snap.shape().batch, 3);
    }

    #[test]
    fn highway_is_deterministic() {
        assert_eq!(highway_scene(7, 3, 4), highway_scene(7, 3, 4));
        assert_ne!(highway_scene(7, 3, 4), highway_scene(8, 3, 4));
    }

    #[test]
    fn highway_ids_are_contiguous() {
        let snap = highway_scene(1, 2, 5);
        for id in 1..=10 {
            assert!(locate(&snap, ActorId(id)).is_some(), "actor {id} missing");
        }
        assert!(locate(&snap, ActorId(11)).is_none());
    }
}
