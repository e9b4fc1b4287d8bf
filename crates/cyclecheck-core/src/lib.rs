#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod document;
pub mod edges;
pub mod graph;
pub mod showcase;
pub mod validator;

pub use document::{DocumentError, parse_edge_list, to_json_string};
pub use edges::{EdgeList, EdgeListError, Vertex};
pub use graph::{CycleGraph, is_single_cycle_graph};
pub use showcase::{ShowcaseCase, showcase};
pub use validator::is_single_cycle;

/// Returns the version of the `cyclecheck-core` library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
