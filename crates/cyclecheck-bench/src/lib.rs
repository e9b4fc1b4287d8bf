//! Edge-list generator and benchmark utilities for `cyclecheck`.
//!
//! This crate provides deterministic generation of single-cycle and
//! near-miss edge lists for benchmarking and property-based testing of
//! `cyclecheck-core`, plus a `petgraph` reference oracle.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, Shape, SizeTier, generate_edges};

/// Returns the path where the huge-tier JSON fixture is stored on disk.
///
/// The file lives under `target/bench-fixtures/huge.edges.json` so it is
/// gitignored and shared between the `gen-huge` binary and the `huge_file`
/// benchmark.
pub fn huge_fixture_path() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
        .join("huge.edges.json")
}
