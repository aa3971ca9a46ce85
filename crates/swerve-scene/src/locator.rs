//! Actor identity resolution.
//!
//! Resolution has exactly one definition: scan the identity channel in
//! storage order (time, then batch, then slot) and take the first match.

use swerve_core::{ActorId, SlotIndex};

use crate::snapshot::{RowIndex, SceneSnapshot};

/// Where an actor was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorLocation {
    /// The first row holding the actor.
    pub row: RowIndex,
    /// The slot holding the actor in that row.
    pub slot: SlotIndex,
}

/// Resolve `actor` to its first matching row and slot.
///
/// Returns `None` for [`ActorId::VACANT`] or when no slot carries the id.
pub fn locate(snapshot: &SceneSnapshot, actor: ActorId) -> Option<ActorLocation> {
    if actor.is_vacant() {
        return None;
    }
    let slots = snapshot.slot_count();
    snapshot.rows().find_map(|row| {
        (0..slots)
            .map(SlotIndex)
            .find(|&slot| snapshot.actor_at(row, slot) == actor)
            .map(|slot| ActorLocation { row, slot })
    })
}

/// Resolve `actor` to its slot index only.
pub fn slot_of(snapshot: &SceneSnapshot, actor: ActorId) -> Option<SlotIndex> {
    locate(snapshot, actor).map(|loc| loc.slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_core::Position;

    fn scene() -> SceneSnapshot {
        let mut snap = SceneSnapshot::zeros(2, 1, 4);
        snap.place_actor(SlotIndex(1), ActorId(3), Position::default(), 0.0, 0.0)
            .unwrap();
        snap.place_actor(SlotIndex(3), ActorId(8), Position::default(), 0.0, 0.0)
            .unwrap();
        snap
    }

    #[test]
    fn finds_present_actor() {
        let snap = scene();
        let loc = locate(&snap, ActorId(8)).unwrap();
        assert_eq!(loc.slot, SlotIndex(3));
        assert_eq!(loc.row, RowIndex::new(0, 0));
    }

    #[test]
    fn vacant_id_never_matches() {
        // Slots 0 and 2 are vacant and carry a zero identity.
        let snap = scene();
        assert_eq!(locate(&snap, ActorId(0)), None);
    }

    #[test]
    fn absent_id_is_not_found() {
        assert_eq!(slot_of(&scene(), ActorId(42)), None);
    }

    #[test]
    fn first_match_in_storage_order_wins() {
        let mut snap = scene();
        // Actor 8 appears in slot 0 only from time step 1 onwards, but the
        // scan reaches (t=0, slot 3) first.
        snap.place_actor(SlotIndex(0), ActorId(8), Position::default(), 0.0, 0.0)
            .unwrap();
        // Undo slot 0 at t=0 so the earliest row only has slot 3.
        let mut arr = snap.into_inner();
        arr[[0, 0, 0, swerve_core::Channel::ActorId.index()]] = 0.0;
        let snap = SceneSnapshot::new(arr).unwrap();

        assert_eq!(slot_of(&snap, ActorId(8)), Some(SlotIndex(3)));
    }

    #[test]
    fn lower_slot_wins_within_a_row() {
        let mut snap = scene();
        snap.place_actor(SlotIndex(0), ActorId(8), Position::default(), 0.0, 0.0)
            .unwrap();
        assert_eq!(slot_of(&snap, ActorId(8)), Some(SlotIndex(0)));
    }

    #[test]
    fn empty_scene_finds_nothing() {
        let snap = SceneSnapshot::zeros(0, 0, 0);
        assert_eq!(locate(&snap, ActorId(1)), None);
    }
}
