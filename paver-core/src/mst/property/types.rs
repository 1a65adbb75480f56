//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the Kruskal implementation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    #[weight(2)]
    Spread,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Sparse graph built from a random spanning path plus a few extras.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph.
    #[weight(2)]
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    #[weight(2)]
    Disconnected,
    /// Parallel edges and self-loops mixed into a small graph.
    #[weight(1)]
    Multigraph,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as a validated [`Graph`].
    pub(super) fn graph(&self) -> Graph {
        let triples = self.edges.iter().map(|edge| {
            let weight = i64::try_from(edge.weight()).expect("fixture weights fit in i64");
            (edge.source(), edge.destination(), weight)
        });
        Graph::from_triples(self.vertex_count, triples).expect("fixture graphs are valid")
    }

    /// Renders a short description for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}
