//! Huge-tier benchmarks (1M edges, roughly 20 MB JSON).
//!
//! Kept apart from the smaller tiers so `cargo bench` stays fast. The fixture
//! is written once by the `gen-huge` binary and loaded here; setup is cached
//! in a `OnceLock` so the read is paid once.
#![allow(clippy::expect_used)]

use std::sync::OnceLock;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cyclecheck_bench::huge_fixture_path;
use cyclecheck_core::{EdgeList, parse_edge_list};

struct HugeSetup {
    json: String,
    edges: EdgeList,
    byte_size: u64,
}

static SETUP: OnceLock<HugeSetup> = OnceLock::new();

fn get_setup() -> &'static HugeSetup {
    SETUP.get_or_init(|| {
        let path = huge_fixture_path();
        eprintln!("Loading huge fixture from {}...", path.display());
        let json = std::fs::read_to_string(&path).expect(
            "Failed to read huge fixture. Run `cargo run -p cyclecheck-bench --bin gen-huge` first.",
        );
        let byte_size = json.len() as u64;
        let edges = parse_edge_list(&json).expect("parse huge fixture");
        eprintln!(
            "Huge tier ready: {} edges, {:.1} MB JSON",
            edges.len(),
            byte_size as f64 / (1024.0 * 1024.0)
        );
        HugeSetup {
            json,
            edges,
            byte_size,
        }
    })
}

fn bench_huge_parse(c: &mut Criterion) {
    let s = get_setup();
    let mut group = c.benchmark_group("huge/parse");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(20));
    group.throughput(Throughput::Bytes(s.byte_size));

    group.bench_function(BenchmarkId::from_parameter("Huge"), |b| {
        b.iter(|| parse_edge_list(&s.json).expect("parse"));
    });
    group.finish();
}

fn bench_huge_check(c: &mut Criterion) {
    let s = get_setup();
    let mut group = c.benchmark_group("huge/is_single_cycle");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(15));
    group.throughput(Throughput::Elements(s.edges.len() as u64));

    group.bench_function(BenchmarkId::from_parameter("Huge"), |b| {
        b.iter(|| s.edges.is_single_cycle());
    });
    group.finish();
}

criterion_group!(benches, bench_huge_parse, bench_huge_check);
criterion_main!(benches);
