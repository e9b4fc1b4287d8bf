//! Reference oracle and invariant checkers for correctness validation.

use cyclecheck_core::EdgeList;
use petgraph::Direction;
use petgraph::algo::kosaraju_scc;

use crate::generator::GeneratorConfig;

/// Answers the single-cycle question with general graph algorithms instead of
/// the linear walk: every vertex has exactly one outgoing and one incoming
/// edge, and the whole graph is one strongly connected component.
pub fn reference_verdict(edges: &EdgeList) -> bool {
    if edges.is_empty() {
        return false;
    }
    let cycle_graph = edges.to_graph();
    if cycle_graph.node_count() != cycle_graph.edge_count() {
        return false;
    }
    let graph = cycle_graph.graph();
    let degrees_ok = graph.node_indices().all(|idx| {
        graph.edges_directed(idx, Direction::Outgoing).count() == 1
            && graph.edges_directed(idx, Direction::Incoming).count() == 1
    });
    degrees_ok && kosaraju_scc(graph).len() == 1
}

/// Verifies that the linear validator and the reference oracle agree.
pub fn check_agrees_with_reference(edges: &EdgeList) -> Result<(), String> {
    let fast = edges.is_single_cycle();
    let reference = reference_verdict(edges);
    if fast != reference {
        return Err(format!(
            "verdict mismatch on {} edges: validator={fast}, reference={reference}",
            edges.len()
        ));
    }
    Ok(())
}

/// Verifies that a generated list gets the verdict its shape promises.
pub fn check_shape_verdict(config: &GeneratorConfig, edges: &EdgeList) -> Result<(), String> {
    let expected = config.shape.expected_verdict();
    let actual = edges.is_single_cycle();
    if expected != actual {
        return Err(format!(
            "shape {} (seed {}, {} vertices): expected {expected}, got {actual}",
            config.shape.name(),
            config.seed,
            config.vertices
        ));
    }
    Ok(())
}

/// Verifies that the graph adapter agrees with the edge-list validator.
pub fn check_graph_adapter(edges: &EdgeList) -> Result<(), String> {
    let list = edges.is_single_cycle();
    let graph = edges.to_graph().is_single_cycle();
    if list != graph {
        return Err(format!(
            "graph adapter mismatch on {} edges: list={list}, graph={graph}",
            edges.len()
        ));
    }
    Ok(())
}
