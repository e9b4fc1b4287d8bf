//! Shape construction: rings, split rings and single-defect near misses.

use cyclecheck_core::{EdgeList, Vertex};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::seq::index;

use super::{GeneratorConfig, Shape};

/// Builds the edge list described by `config`.
pub fn build(config: &GeneratorConfig, rng: &mut StdRng) -> EdgeList {
    let n = config.vertices.max(min_vertices(config.shape));
    let mut labels: Vec<Vertex> = (1..=n as Vertex)
        .map(|v| v + config.label_offset)
        .collect();
    labels.shuffle(rng);

    let mut rows = match config.shape {
        Shape::SingleCycle => ring(&labels),
        Shape::SplitCycles { parts } => split_rings(&labels, parts, rng),
        Shape::BrokenChain => {
            let mut rows = ring(&labels);
            let fresh = n as Vertex + 1 + config.label_offset;
            if let Some(closing) = rows.last_mut() {
                closing.1 = fresh;
            }
            rows
        }
        Shape::DuplicateSource => {
            let mut rows = ring(&labels);
            let (k, j) = two_distinct(rows.len(), rng);
            rows[k].0 = rows[j].0;
            rows
        }
        Shape::DuplicateTarget => {
            let mut rows = ring(&labels);
            let (k, j) = two_distinct(rows.len(), rng);
            rows[k].1 = rows[j].1;
            rows
        }
        Shape::SelfLoopInside => {
            let mut rows = vec![(labels[0], labels[0])];
            rows.extend(ring(&labels[1..]));
            rows
        }
    };

    if config.shuffle_rows {
        rows.shuffle(rng);
    }
    EdgeList::from_pairs(rows)
}

fn min_vertices(shape: Shape) -> usize {
    match shape {
        Shape::SingleCycle => 1,
        Shape::SplitCycles { .. }
        | Shape::BrokenChain
        | Shape::DuplicateSource
        | Shape::DuplicateTarget
        | Shape::SelfLoopInside => 2,
    }
}

/// `labels[0] → labels[1] → … → labels[0]`.
fn ring(labels: &[Vertex]) -> Vec<(Vertex, Vertex)> {
    labels
        .iter()
        .copied()
        .zip(labels.iter().copied().cycle().skip(1))
        .collect()
}

/// Cuts `labels` at `parts - 1` random positions and closes each piece into
/// its own ring.
fn split_rings(labels: &[Vertex], parts: usize, rng: &mut StdRng) -> Vec<(Vertex, Vertex)> {
    let n = labels.len();
    let parts = parts.clamp(2, n);

    let mut cuts: Vec<usize> = index::sample(rng, n - 1, parts - 1)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    cuts.sort_unstable();
    cuts.push(n);

    let mut rows = Vec::with_capacity(n);
    let mut start = 0;
    for end in cuts {
        rows.extend(ring(&labels[start..end]));
        start = end;
    }
    rows
}

/// Two different indices in `0..len`; `len` must be at least 2.
fn two_distinct(len: usize, rng: &mut StdRng) -> (usize, usize) {
    let k = rng.gen_range(0..len);
    let j = (k + rng.gen_range(1..len)) % len;
    (k, j)
}
