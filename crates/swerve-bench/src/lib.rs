//! Benchmark profiles for the Swerve maneuver engine.
//!
//! - [`reference_scene`]: 4 lanes x 25 actors over 8 x 4 rows
//! - [`stress_scene`]: 8 lanes x 125 actors over 8 x 4 rows
//! - [`reference_table`]: one maneuver per actor, cycling through every kind

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swerve_core::{AbsoluteFrame, ActorId, Position, SceneId, SlotIndex};
use swerve_engine::SceneTable;
use swerve_maneuver::{ManeuverKind, ManeuverSpec};
use swerve_scene::SceneSnapshot;

/// Scene id used by [`reference_table`].
pub const BENCH_SCENE: &str = "bench";

/// Reference scene: 100 actors, 32 rows.
pub fn reference_scene(seed: u64) -> SceneSnapshot {
    traffic(seed, 4, 25, 8, 4)
}

/// Stress scene: 1000 actors, 32 rows.
pub fn stress_scene(seed: u64) -> SceneSnapshot {
    traffic(seed, 8, 125, 8, 4)
}

/// Deterministic multi-lane traffic.
///
/// Lanes are 3.5 apart along z; gaps along x are derived from a simple
/// hash of the seed so runs are reproducible without an RNG. Ids start at
/// 1 and run lane-major.
pub fn traffic(seed: u64, lanes: usize, per_lane: usize, time: usize, batch: usize) -> SceneSnapshot {
    let mut snap = SceneSnapshot::zeros(time, batch, lanes * per_lane);
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut slot = 0;
    for lane in 0..lanes {
        let z = lane as f32 * 3.5;
        let mut x = 0.0f32;
        for _ in 0..per_lane {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            x += 4.0 + (state >> 40) as f32 / (1u64 << 24) as f32 * 26.0;
            let id = ActorId(slot as u32 + 1);
            snap.place_actor(SlotIndex(slot), id, Position::new(x, 0.0, z), 0.0, 10.0)
                .unwrap();
            slot += 1;
        }
    }
    snap
}

/// One maneuver per actor `1..=actors`, cycling through every kind.
///
/// Every maneuver starts at frame 0 and lasts `frames` frames.
pub fn reference_table(actors: u32, frames: u32) -> SceneTable {
    let mut table = SceneTable::new();
    let scene = SceneId::from(BENCH_SCENE);
    for id in 1..=actors {
        let kind = ManeuverKind::ALL[(id as usize - 1) % ManeuverKind::ALL.len()];
        let mut spec = ManeuverSpec::with_duration(frames);
        spec.angle = 0.3;
        spec.x_offset = 0.1;
        spec.z_offset = 0.05;
        spec.max_rotation = 1.0;
        spec.maneuver_starting_frame = AbsoluteFrame(0);
        table.insert(scene.clone(), ActorId(id), kind, spec);
    }
    table
}
