//! Weighted graph representation consumed by the spanning-tree builder.
//!
//! Vertices are plain indices in `[0, vertex_count)`. Edges are stored in
//! insertion order; self-loops and parallel edges are accepted here and
//! resolved by the algorithms that consume them.

use crate::error::GraphError;

/// Non-negative edge cost.
pub type Weight = u64;

/// Sum of many edge weights.
///
/// Wide enough that adding any number of [`Weight`] values held in memory
/// cannot overflow.
pub type TotalWeight = u128;

/// A weighted connection between two vertices.
///
/// The representation is directed (`source` → `destination`) but every
/// algorithm in this crate treats edges as undirected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge.
    ///
    /// # Examples
    /// ```
    /// use paver_core::Edge;
    ///
    /// let edge = Edge::new(0, 3, 7);
    /// assert_eq!((edge.source(), edge.destination(), edge.weight()), (0, 3, 7));
    /// ```
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the destination endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        if self.source <= self.destination {
            (self.source, self.destination)
        } else {
            (self.destination, self.source)
        }
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    pub(crate) fn validate(&self, vertex_count: usize) -> Result<(), GraphError> {
        check_vertex(self.source, vertex_count)?;
        check_vertex(self.destination, vertex_count)
    }
}

pub(crate) const fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// An undirected weighted graph with a fixed vertex count.
///
/// # Examples
/// ```
/// use paver_core::Graph;
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 1)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), paver_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an edgeless graph with `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
        })
    }

    /// Builds a graph from `(source, destination, weight)` triples.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Graph::new`] and
    /// [`Graph::add_edge`].
    ///
    /// # Examples
    /// ```
    /// use paver_core::Graph;
    ///
    /// let graph = Graph::from_triples(4, [(0, 1, 4), (1, 2, 3), (2, 3, 1)])?;
    /// assert_eq!(graph.edges()[2].weight(), 1);
    /// # Ok::<(), paver_core::GraphError>(())
    /// ```
    pub fn from_triples(
        vertex_count: usize,
        triples: impl IntoIterator<Item = (usize, usize, i64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for (source, destination, weight) in triples {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    /// Appends an edge and returns its position in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of this graph and [`GraphError::NegativeWeight`] when `weight`
    /// is negative.
    pub fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: i64,
    ) -> Result<usize, GraphError> {
        let weight = Weight::try_from(weight).map_err(|_| GraphError::NegativeWeight {
            left: source,
            right: destination,
            weight,
        })?;
        self.insert_edge(Edge::new(source, destination, weight))
    }

    /// Appends an already-typed edge and returns its position.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of this graph.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<usize, GraphError> {
        edge.validate(self.vertex_count)?;
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }
}
