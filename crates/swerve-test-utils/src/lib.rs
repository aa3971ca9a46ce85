//! Test utilities and scene fixtures for Swerve development.
//!
//! Provides a [`SceneBuilder`] for hand-placed scenes, canned layouts
//! used across the workspace's tests, and a seeded [`highway_scene`]
//! generator for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_close, following_pair, highway_scene, lone_actor, two_actor_scene, SceneBuilder,
    DEFAULT_TOLERANCE,
};
