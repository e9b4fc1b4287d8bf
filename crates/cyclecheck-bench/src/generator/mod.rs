//! Edge-list generator.
//!
//! Produces [`EdgeList`] instances of a chosen [`Shape`]: one valid cycle, or
//! one of several near misses that differ from a valid cycle by a single
//! structural defect.

pub mod shapes;

use cyclecheck_core::EdgeList;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Structure of a generated edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One cycle through all vertices.
    SingleCycle,
    /// The vertices split into `parts` disjoint cycles (clamped to `2..=n`).
    SplitCycles {
        /// Number of disjoint cycles.
        parts: usize,
    },
    /// A cycle whose closing edge points at a fresh label with no outgoing
    /// edge.
    BrokenChain,
    /// A cycle where one edge's source is replaced by another edge's source.
    DuplicateSource,
    /// A cycle where one edge's target is replaced by another edge's target.
    DuplicateTarget,
    /// A self-loop on one vertex plus a cycle through the rest.
    SelfLoopInside,
}

impl Shape {
    /// The answer a correct validator gives for this shape.
    pub fn expected_verdict(self) -> bool {
        match self {
            Shape::SingleCycle => true,
            Shape::SplitCycles { .. }
            | Shape::BrokenChain
            | Shape::DuplicateSource
            | Shape::DuplicateTarget
            | Shape::SelfLoopInside => false,
        }
    }

    /// Every shape, with two-way splits for [`Shape::SplitCycles`].
    pub fn all() -> [Shape; 6] {
        [
            Shape::SingleCycle,
            Shape::SplitCycles { parts: 2 },
            Shape::BrokenChain,
            Shape::DuplicateSource,
            Shape::DuplicateTarget,
            Shape::SelfLoopInside,
        ]
    }

    /// Short name for benchmark ids and test labels.
    pub fn name(self) -> &'static str {
        match self {
            Shape::SingleCycle => "single_cycle",
            Shape::SplitCycles { .. } => "split_cycles",
            Shape::BrokenChain => "broken_chain",
            Shape::DuplicateSource => "duplicate_source",
            Shape::DuplicateTarget => "duplicate_target",
            Shape::SelfLoopInside => "self_loop_inside",
        }
    }
}

/// Configuration for the edge-list generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices. Shapes other than [`Shape::SingleCycle`] need at
    /// least 2 and are bumped up to it.
    pub vertices: usize,
    /// Structure to generate.
    pub shape: Shape,
    /// Shuffle the edge rows after construction.
    pub shuffle_rows: bool,
    /// Added to every label; labels are `1 + offset ..= vertices + offset`.
    pub label_offset: i64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1,000 vertices.
    Small,
    /// 10,000 vertices.
    Medium,
    /// 100,000 vertices (the nominal upper bound of the problem).
    Large,
    /// 1,000,000 vertices, written to disk by `gen-huge`.
    Huge,
}

impl SizeTier {
    /// Number of vertices in this tier.
    pub fn vertices(self) -> usize {
        match self {
            SizeTier::Small => 1_000,
            SizeTier::Medium => 10_000,
            SizeTier::Large => 100_000,
            SizeTier::Huge => 1_000_000,
        }
    }

    /// A shuffled single cycle of this tier's size.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        self.config_with_shape(seed, Shape::SingleCycle)
    }

    /// A shuffled edge list of this tier's size and the given shape.
    pub fn config_with_shape(self, seed: u64, shape: Shape) -> GeneratorConfig {
        GeneratorConfig {
            seed,
            vertices: self.vertices(),
            shape,
            shuffle_rows: true,
            label_offset: 0,
        }
    }
}

/// Generates an edge list from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_edges(config: &GeneratorConfig) -> EdgeList {
    let mut rng = StdRng::seed_from_u64(config.seed);
    shapes::build(config, &mut rng)
}
