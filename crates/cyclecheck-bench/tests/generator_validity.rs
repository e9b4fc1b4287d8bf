//! Tests that generated edge lists have the structure their shape promises.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use cyclecheck_bench::correctness;
use cyclecheck_bench::{GeneratorConfig, Shape, SizeTier, generate_edges};
use cyclecheck_core::{EdgeList, Vertex};

fn assert_shape(config: &GeneratorConfig, label: &str) {
    let edges = generate_edges(config);
    correctness::check_shape_verdict(config, &edges)
        .unwrap_or_else(|e| panic!("{label}: {e}"));
}

#[test]
fn small_shapes_get_their_verdict() {
    for seed in [42, 123, 999, 7777, 54321] {
        for shape in Shape::all() {
            let config = SizeTier::Small.config_with_shape(seed, shape);
            assert_shape(&config, &format!("Small/{}/seed={seed}", shape.name()));
        }
    }
}

#[test]
fn medium_shapes_get_their_verdict() {
    for shape in Shape::all() {
        let config = SizeTier::Medium.config_with_shape(42, shape);
        assert_shape(&config, &format!("Medium/{}", shape.name()));
    }
}

#[test]
fn large_single_cycle_is_accepted() {
    assert_shape(&SizeTier::Large.config(42), "Large/single_cycle");
}

#[test]
fn single_cycle_uses_every_label_once_per_column() {
    let config = GeneratorConfig {
        seed: 5,
        vertices: 500,
        shape: Shape::SingleCycle,
        shuffle_rows: true,
        label_offset: 1_000,
    };
    let edges = generate_edges(&config);
    assert_eq!(edges.len(), 500);

    let expected: HashSet<Vertex> = (1_001..=1_500).collect();
    let sources: HashSet<Vertex> = edges.sources().iter().copied().collect();
    let targets: HashSet<Vertex> = edges.targets().iter().copied().collect();
    assert_eq!(sources, expected);
    assert_eq!(targets, expected);
}

#[test]
fn tiny_configs_are_bumped_to_a_usable_size() {
    for shape in Shape::all() {
        let config = GeneratorConfig {
            seed: 1,
            vertices: 0,
            shape,
            shuffle_rows: false,
            label_offset: 0,
        };
        let edges = generate_edges(&config);
        assert!(!edges.is_empty(), "{}", shape.name());
        assert_shape(&config, &format!("tiny/{}", shape.name()));
    }
}

#[test]
fn split_cycles_with_many_parts() {
    for parts in [2, 3, 10, 1_000] {
        let config = GeneratorConfig {
            seed: 9,
            vertices: 100,
            shape: Shape::SplitCycles { parts },
            shuffle_rows: true,
            label_offset: -50,
        };
        assert_shape(&config, &format!("split/parts={parts}"));
    }
}

#[test]
fn generated_list_round_trips_through_json() {
    let edges = generate_edges(&SizeTier::Small.config(42));
    let json = serde_json::to_string(&edges).expect("serialize");
    let back: EdgeList = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(edges, back);
}

#[test]
fn generation_is_deterministic() {
    for shape in Shape::all() {
        let a = generate_edges(&SizeTier::Small.config_with_shape(42, shape));
        let b = generate_edges(&SizeTier::Small.config_with_shape(42, shape));
        assert_eq!(a, b, "same seed must produce identical output");
    }
}

#[test]
fn different_seeds_produce_different_output() {
    let a = generate_edges(&SizeTier::Small.config(42));
    let b = generate_edges(&SizeTier::Small.config(43));
    assert_ne!(a, b);
}
