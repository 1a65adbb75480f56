//! Minimum spanning tree (MST) construction.
//!
//! Kruskal's algorithm over a stable weight sort: edges of equal weight keep
//! their insertion order, so the same input always yields the same forest.
//! Cycle checks go through [`DisjointSet`].

mod union_find;

use tracing::{debug, instrument};

use crate::{
    error::GraphError,
    graph::{Edge, Graph, TotalWeight, Weight},
};

pub use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    vertex_count: usize,
    edges: Vec<Edge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in the order Kruskal accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the vertex count of the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sums the weights of all forest edges.
    #[must_use]
    pub fn total_weight(&self) -> TotalWeight {
        self.edges
            .iter()
            .map(|edge| TotalWeight::from(edge.weight()))
            .sum()
    }

    /// Renders the forest as a symmetric weight matrix.
    ///
    /// Cell `[u][v]` holds the weight of the forest edge joining `u` and `v`,
    /// or zero when they are not adjacent.
    ///
    /// # Examples
    /// ```
    /// use paver_core::{Graph, kruskal};
    ///
    /// let graph = Graph::from_triples(3, [(0, 1, 4), (1, 2, 2), (0, 2, 9)])?;
    /// let forest = kruskal(&graph)?;
    /// assert_eq!(
    ///     forest.adjacency_matrix(),
    ///     vec![vec![0, 4, 0], vec![4, 0, 2], vec![0, 2, 0]],
    /// );
    /// # Ok::<(), paver_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let mut matrix = vec![vec![0; self.vertex_count]; self.vertex_count];
        for edge in &self.edges {
            matrix[edge.source()][edge.destination()] = edge.weight();
            matrix[edge.destination()][edge.source()] = edge.weight();
        }
        matrix
    }
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// # Errors
/// Never fails for a graph built through [`Graph`]'s validated constructors;
/// the error path exists for parity with [`kruskal_from_edges`].
///
/// # Examples
/// ```
/// use paver_core::{Graph, kruskal};
///
/// let graph = Graph::from_triples(4, [(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 10)])?;
/// let forest = kruskal(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), paver_core::GraphError>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningForest, GraphError> {
    kruskal_from_edges(graph.vertex_count(), graph.edges())
}

/// Computes a minimum spanning forest over a raw edge list.
///
/// Self-loops are never selected. Parallel edges are allowed; only the
/// lightest (earliest on ties) can be selected.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0` and
/// [`GraphError::VertexOutOfRange`] when an edge references a vertex
/// `>= vertex_count`.
#[instrument(
    name = "core.kruskal",
    level = "debug",
    err,
    skip(edges),
    fields(edges = edges.len()),
)]
pub fn kruskal_from_edges(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<SpanningForest, GraphError> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    for edge in edges {
        edge.validate(vertex_count)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(Edge::weight);

    let target_len = vertex_count - 1;
    let mut sets = DisjointSet::new(vertex_count);
    let mut forest_edges = Vec::with_capacity(target_len);

    for edge in sorted {
        if forest_edges.len() == target_len {
            break;
        }
        let source_root = sets.find(edge.source())?;
        let destination_root = sets.find(edge.destination())?;
        if source_root != destination_root {
            sets.union(source_root, destination_root)?;
            forest_edges.push(edge);
        }
    }

    debug!(
        selected = forest_edges.len(),
        components = sets.components(),
        "spanning forest built"
    );
    Ok(SpanningForest {
        vertex_count,
        edges: forest_edges,
        component_count: sets.components(),
    })
}

#[cfg(test)]
mod property;
