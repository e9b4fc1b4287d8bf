/// `petgraph` adapters for edge lists.
///
/// [`CycleGraph`] materialises an [`EdgeList`] as a [`StableDiGraph`] so hosts
/// can run `petgraph` algorithms over the same input they validate.
/// [`is_single_cycle_graph`] goes the other way and runs the single-cycle check
/// over any directed `petgraph` graph, using node indices as labels.
use std::collections::HashMap;
use std::hash::Hash;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, GraphProp, IntoEdgeReferences, NodeCount};

use crate::edges::{EdgeList, Vertex};
use crate::validator::is_single_cycle;

// ---------------------------------------------------------------------------
// CycleGraph
// ---------------------------------------------------------------------------

/// A directed multigraph built from an [`EdgeList`].
///
/// Node weights are vertex labels; edge weights are the row index `k` of the
/// originating edge `from[k] → to[k]`. Parallel edges and self-loops are kept
/// as separate petgraph edges.
#[derive(Debug, Clone)]
pub struct CycleGraph {
    graph: StableDiGraph<Vertex, usize>,
    label_to_index: HashMap<Vertex, NodeIndex>,
}

impl CycleGraph {
    /// Builds the graph in two passes: one node per distinct label (first
    /// occurrence order, sources before targets row by row), then one edge per
    /// row.
    pub fn from_edge_list(edges: &EdgeList) -> Self {
        let mut graph = StableDiGraph::with_capacity(edges.len(), edges.len());
        let mut label_to_index: HashMap<Vertex, NodeIndex> =
            HashMap::with_capacity(edges.len());

        for (source, target) in edges.edges() {
            for label in [source, target] {
                label_to_index
                    .entry(label)
                    .or_insert_with(|| graph.add_node(label));
            }
        }

        for (row, (source, target)) in edges.edges().enumerate() {
            if let (Some(&a), Some(&b)) =
                (label_to_index.get(&source), label_to_index.get(&target))
            {
                graph.add_edge(a, b, row);
            }
        }

        Self {
            graph,
            label_to_index,
        }
    }

    /// Number of distinct vertex labels.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Looks up the node for a vertex label.
    pub fn node_index(&self, label: Vertex) -> Option<NodeIndex> {
        self.label_to_index.get(&label).copied()
    }

    /// Returns the vertex label stored on `idx`.
    pub fn label(&self, idx: NodeIndex) -> Option<Vertex> {
        self.graph.node_weight(idx).copied()
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &StableDiGraph<Vertex, usize> {
        &self.graph
    }

    /// Single-cycle check over the materialised graph. Agrees with
    /// [`EdgeList::is_single_cycle`] on the list it was built from.
    pub fn is_single_cycle(&self) -> bool {
        is_single_cycle_graph(&self.graph)
    }
}

impl EdgeList {
    /// Materialises this list as a [`CycleGraph`].
    pub fn to_graph(&self) -> CycleGraph {
        CycleGraph::from_edge_list(self)
    }
}

// ---------------------------------------------------------------------------
// Generic petgraph entry point
// ---------------------------------------------------------------------------

/// Returns `true` if `graph` is directed and its edges form exactly one cycle
/// through all of its nodes.
///
/// Unlike the edge-list form, a `petgraph` graph can hold isolated nodes; any
/// graph whose node count differs from its edge count is rejected. Undirected
/// graphs are always rejected.
pub fn is_single_cycle_graph<G>(graph: G) -> bool
where
    G: IntoEdgeReferences + NodeCount + GraphProp,
    G::NodeId: Eq + Hash,
{
    if !graph.is_directed() {
        return false;
    }
    let (from, to): (Vec<G::NodeId>, Vec<G::NodeId>) = graph
        .edge_references()
        .map(|edge| (edge.source(), edge.target()))
        .unzip();

    if from.len() != graph.node_count() {
        tracing::debug!(
            nodes = graph.node_count(),
            edges = from.len(),
            "node and edge counts differ"
        );
        return false;
    }
    is_single_cycle(&from, &to)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
