//! Single-source shortest paths over a spanning forest.
//!
//! [`RoadNetwork`] indexes an edge list once: an adjacency view in which
//! every stored edge is traversable in both directions, and a map from the
//! unordered endpoint pair to the edge's position. Each query then runs a
//! dense O(V²) Dijkstra and hands back a [`ShortestPathTree`] from which paths
//! to any destination can be rebuilt.

use std::collections::HashMap;

use tracing::{instrument, trace};

use crate::{
    error::{PaverError, Result},
    graph::{Edge, Weight, check_vertex},
};

/// A traversal step: the far endpoint plus the cost to reach it.
#[derive(Clone, Copy, Debug)]
struct Arc {
    neighbour: usize,
    weight: Weight,
}

/// An indexed, bidirectional view over an edge list.
///
/// # Examples
/// ```
/// use paver_core::{Edge, RoadNetwork};
///
/// let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 3), Edge::new(2, 3, 1)];
/// let network = RoadNetwork::new(&edges, 4)?;
/// let tree = network.shortest_paths(3)?;
/// assert_eq!(tree.distance_to(0)?, Some(8));
/// assert_eq!(network.path_edges(&tree, 0)?, vec![2, 1, 0]);
/// # Ok::<(), paver_core::PaverError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RoadNetwork<'a> {
    edges: &'a [Edge],
    adjacency: Vec<Vec<Arc>>,
    pair_index: HashMap<(usize, usize), usize>,
}

impl<'a> RoadNetwork<'a> {
    /// Indexes `edges` over `vertex_count` vertices.
    ///
    /// When several edges join the same unordered pair, the first one in
    /// `edges` is the one reported by [`RoadNetwork::path_edges`].
    ///
    /// # Errors
    /// Returns [`PaverError::Graph`] when an edge references a vertex
    /// `>= vertex_count`.
    pub fn new(edges: &'a [Edge], vertex_count: usize) -> Result<Self> {
        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut pair_index = HashMap::with_capacity(edges.len());
        for (position, edge) in edges.iter().enumerate() {
            edge.validate(vertex_count)?;
            adjacency[edge.source()].push(Arc {
                neighbour: edge.destination(),
                weight: edge.weight(),
            });
            adjacency[edge.destination()].push(Arc {
                neighbour: edge.source(),
                weight: edge.weight(),
            });
            pair_index.entry(edge.endpoints()).or_insert(position);
        }
        Ok(Self {
            edges,
            adjacency,
            pair_index,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the indexed edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &'a [Edge] { self.edges }

    /// Returns the position of the first edge joining `left` and `right`.
    #[must_use]
    pub fn edge_between(&self, left: usize, right: usize) -> Option<usize> {
        let key = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        self.pair_index.get(&key).copied()
    }

    /// Computes shortest distances and predecessors from `source`.
    ///
    /// Runs `vertex_count - 1` rounds of minimum selection over unvisited
    /// vertices, stopping early once every reachable vertex is settled.
    /// Predecessors change only on a strictly shorter distance, so the
    /// first-found path wins ties.
    ///
    /// # Errors
    /// Returns [`PaverError::SourceOutOfRange`] when `source` is not a vertex.
    #[instrument(name = "core.shortest_paths", level = "trace", skip(self), err)]
    pub fn shortest_paths(&self, source: usize) -> Result<ShortestPathTree> {
        let vertex_count = self.vertex_count();
        if source >= vertex_count {
            return Err(PaverError::SourceOutOfRange {
                vertex: source,
                vertex_count,
            });
        }

        let mut distances: Vec<Option<Weight>> = vec![None; vertex_count];
        let mut previous: Vec<Option<usize>> = vec![None; vertex_count];
        let mut visited = vec![false; vertex_count];
        distances[source] = Some(0);

        for _ in 1..vertex_count {
            let Some((current, base)) = closest_unvisited(&distances, &visited) else {
                break;
            };
            visited[current] = true;

            for arc in &self.adjacency[current] {
                if visited[arc.neighbour] {
                    continue;
                }
                let candidate = base.saturating_add(arc.weight);
                if distances[arc.neighbour].is_none_or(|known| candidate < known) {
                    distances[arc.neighbour] = Some(candidate);
                    previous[arc.neighbour] = Some(current);
                }
            }
        }

        trace!(
            reached = distances.iter().filter(|d| d.is_some()).count(),
            "shortest paths settled"
        );
        Ok(ShortestPathTree {
            source,
            distances,
            previous,
        })
    }

    /// Returns the positions (in [`RoadNetwork::edges`]) of the edges along
    /// the path from `tree`'s source to `destination`, in travel order.
    ///
    /// The result is empty when `destination` is the source or unreachable.
    ///
    /// # Errors
    /// Returns [`PaverError::DestinationOutOfRange`] when `destination` is not
    /// a vertex.
    pub fn path_edges(&self, tree: &ShortestPathTree, destination: usize) -> Result<Vec<usize>> {
        let hops = tree.path_to(destination)?;
        Ok(hops
            .into_iter()
            .filter_map(|(from, to)| self.edge_between(from, to))
            .collect())
    }
}

fn closest_unvisited(distances: &[Option<Weight>], visited: &[bool]) -> Option<(usize, Weight)> {
    let mut best: Option<(usize, Weight)> = None;
    for (vertex, distance) in distances.iter().enumerate() {
        let Some(distance) = *distance else { continue };
        if visited[vertex] {
            continue;
        }
        if best.is_none_or(|(_, known)| distance < known) {
            best = Some((vertex, distance));
        }
    }
    best
}

/// Distances and predecessor links from a single source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Option<Weight>>,
    previous: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the best known distance per vertex; `None` marks unreached
    /// vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<Weight>] { &self.distances }

    /// Returns the predecessor per vertex; `None` for the source and for
    /// unreached vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn previous(&self) -> &[Option<usize>] { &self.previous }

    /// Returns the cost of the shortest path to `destination`, or `None` if it
    /// is unreachable.
    ///
    /// # Errors
    /// Returns [`PaverError::DestinationOutOfRange`] when `destination` is not
    /// a vertex.
    pub fn distance_to(&self, destination: usize) -> Result<Option<Weight>> {
        self.check_destination(destination)?;
        Ok(self.distances[destination])
    }

    /// Rebuilds the hops `(from, to)` from the source to `destination`.
    ///
    /// # Errors
    /// Returns [`PaverError::DestinationOutOfRange`] when `destination` is not
    /// a vertex.
    pub fn path_to(&self, destination: usize) -> Result<Vec<(usize, usize)>> {
        self.check_destination(destination)?;

        let mut hops = Vec::new();
        let mut current = destination;
        while let Some(previous) = self.previous[current] {
            hops.push((previous, current));
            current = previous;
        }
        hops.reverse();
        Ok(hops)
    }

    fn check_destination(&self, destination: usize) -> Result<()> {
        check_vertex(destination, self.previous.len()).map_err(|_| {
            PaverError::DestinationOutOfRange {
                vertex: destination,
                vertex_count: self.previous.len(),
            }
        })
    }
}

/// Computes single-source shortest paths over `edges` without keeping the
/// index around.
///
/// # Errors
/// Fails under the same conditions as [`RoadNetwork::new`] and
/// [`RoadNetwork::shortest_paths`].
///
/// # Examples
/// ```
/// use paver_core::{Edge, shortest_paths};
///
/// let edges = [
///     Edge::new(0, 1, 4),
///     Edge::new(1, 2, 3),
///     Edge::new(0, 2, 10),
///     Edge::new(2, 3, 1),
/// ];
/// let tree = shortest_paths(&edges, 4, 0)?;
/// assert_eq!(tree.distance_to(3)?, Some(8));
/// assert_eq!(tree.path_to(3)?, vec![(0, 1), (1, 2), (2, 3)]);
/// # Ok::<(), paver_core::PaverError>(())
/// ```
pub fn shortest_paths(
    edges: &[Edge],
    vertex_count: usize,
    source: usize,
) -> Result<ShortestPathTree> {
    RoadNetwork::new(edges, vertex_count)?.shortest_paths(source)
}
