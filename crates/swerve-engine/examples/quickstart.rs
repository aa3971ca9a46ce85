//! Swerve Quickstart: perturb a small highway scene.
//!
//! Demonstrates:
//!   1. Loading a scene table from JSON
//!   2. Building a SceneRunner with default tuning
//!   3. Stepping frame by frame and reading the reports
//!   4. Running the built-in reference scene
//!
//! Run with:
//!   RUST_LOG=swerve_engine=debug cargo run --example quickstart

use swerve_core::{AbsoluteFrame, ActorId, SceneId};
use swerve_engine::{EngineConfig, SceneRunner, SceneTable, TickOutcome};
use swerve_maneuver::Effect;
use swerve_scene::locate;
use swerve_test_utils::{following_pair, highway_scene};
use tracing_subscriber::EnvFilter;

// ─── Scene table ────────────────────────────────────────────────
//
// Actor 1 brakes hard at frame 5 behind actor 2, which shifts right
// half a lane a little later.

const TABLE: &str = r#"{
    "highway": {
        "1": {
            "sudden_stop": {
                "frames_per_maneuver": 8,
                "maneuver_starting_frame": 5,
                "maneuver_ending_frame": 14
            }
        },
        "2": {
            "right_lane_shift": {
                "angle": 0.05,
                "z_offset": 0.1,
                "max_rotation": 0.2,
                "frames_per_maneuver": 10,
                "maneuver_starting_frame": 8
            }
        }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ─── 1. Table and runner ────────────────────────────────────

    let table = SceneTable::from_json_str(TABLE)?;
    let scene = SceneId::from("highway");
    let mut runner = SceneRunner::from_table(&table, &scene, EngineConfig::default())?;
    println!("resolved {} maneuvers for '{scene}'", runner.drivers().len());

    // ─── 2. Step ────────────────────────────────────────────────

    let mut snapshot = following_pair(7.0);
    for now in 0..20 {
        let report = runner.step(AbsoluteFrame(now), &mut snapshot);
        for entry in &report.drivers {
            match &entry.outcome {
                TickOutcome::Applied { frame, outcome } => match outcome.effect {
                    Effect::Target {
                        position,
                        stopping_distance,
                        constrained_by,
                        ..
                    } => println!(
                        "t={now:>2} actor {} {} f={:>2} -> {position} (d={stopping_distance:.2}, ahead={constrained_by:?})",
                        entry.actor, entry.kind, frame.0
                    ),
                    Effect::Delta {
                        heading,
                        translation,
                        ..
                    } => println!(
                        "t={now:>2} actor {} {} f={:>2} heading {heading:+.3} move {translation}",
                        entry.actor, entry.kind, frame.0
                    ),
                },
                TickOutcome::Skipped { reason, .. } => println!("t={now:>2} skipped: {reason}"),
                TickOutcome::Idle | TickOutcome::Completed => {}
            }
        }
    }
    println!("metrics: {:?}", runner.metrics());

    let stopped = locate(&snapshot, ActorId(1)).and_then(|loc| snapshot.position_at(loc.row, loc.slot));
    println!("actor 1 came to rest at {stopped:?}");

    // ─── 3. Reference scene ─────────────────────────────────────

    let mut reference = SceneRunner::from_table(
        &SceneTable::builtin(),
        &SceneId::from("0006"),
        EngineConfig::default(),
    )?;
    let mut traffic = highway_scene(7, 3, 4);
    let metrics = reference.run(0..30, &mut traffic);
    println!("reference scene 0006: {metrics:?}");

    Ok(())
}
