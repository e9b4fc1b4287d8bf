//! Generates the huge-tier benchmark fixture to disk.
//!
//! Writes a shuffled one-million-edge single cycle as JSON to
//! `target/bench-fixtures/`; it is loaded by `benches/huge_file.rs` at
//! benchmark time.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use cyclecheck_bench::{SizeTier, generate_edges, huge_fixture_path};

fn main() -> Result<(), Box<dyn Error>> {
    let json_path = huge_fixture_path();

    if let Some(parent) = json_path.parent() {
        fs::create_dir_all(parent)?;
    }

    eprintln!("Generating Huge tier (1M edges)...");
    let edges = generate_edges(&SizeTier::Huge.config(42));
    eprintln!("Generated {} edges", edges.len());

    eprintln!("Writing JSON to {}...", json_path.display());
    let out = fs::File::create(&json_path)?;
    let writer = BufWriter::new(out);
    serde_json::to_writer(writer, &edges)?;

    let json_meta = fs::metadata(&json_path)?;
    eprintln!("JSON: {:.1} MB", json_meta.len() as f64 / (1024.0 * 1024.0));

    Ok(())
}
