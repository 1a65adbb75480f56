//! Hub-to-hub edge usage over a spanning forest.
//!
//! For every ordered pair of hubs the shortest path through the forest is
//! rebuilt and each edge on it is flagged. Flags live in a bitmap aligned with
//! the forest's edge list, so marking is idempotent and the input edges stay
//! untouched.

use tracing::{debug, instrument};

use crate::{
    error::{PaverError, Result},
    graph::{Edge, TotalWeight, Weight},
    paths::{RoadNetwork, ShortestPathTree},
};

/// Accumulates used-edge flags across repeated path queries.
///
/// # Examples
/// ```
/// use paver_core::{Edge, RoadNetwork, UsageAccumulator};
///
/// let edges = [Edge::new(0, 1, 2), Edge::new(1, 2, 5), Edge::new(1, 3, 1)];
/// let network = RoadNetwork::new(&edges, 4)?;
/// let mut usage = UsageAccumulator::new(&network);
/// usage.record_pair(0, 3)?;
/// let report = usage.finish();
/// assert_eq!(report.painted_weight(), 3);
/// assert!(!report.is_used(1));
/// # Ok::<(), paver_core::PaverError>(())
/// ```
#[derive(Debug)]
pub struct UsageAccumulator<'n, 'e> {
    network: &'n RoadNetwork<'e>,
    used: Vec<bool>,
}

impl<'n, 'e> UsageAccumulator<'n, 'e> {
    /// Starts with every edge of `network` unused.
    #[must_use]
    pub fn new(network: &'n RoadNetwork<'e>) -> Self {
        Self {
            network,
            used: vec![false; network.edges().len()],
        }
    }

    /// Marks the edges on the shortest path from `source` to `destination`.
    ///
    /// Returns how many edges changed from unused to used.
    ///
    /// # Errors
    /// Returns [`PaverError::SourceOutOfRange`] or
    /// [`PaverError::DestinationOutOfRange`] for ids outside the network.
    pub fn record_pair(&mut self, source: usize, destination: usize) -> Result<usize> {
        let tree = self.network.shortest_paths(source)?;
        self.record_tree(&tree, [destination])
    }

    /// Marks the edges joining every ordered pair of `hubs`.
    ///
    /// All hubs are checked before anything is marked. Each distinct source
    /// hub costs one shortest-path run.
    ///
    /// # Errors
    /// Returns [`PaverError::HubOutOfRange`] for the first hub outside the
    /// network.
    #[instrument(
        name = "core.record_hubs",
        level = "debug",
        err,
        skip(self, hubs),
        fields(hubs = hubs.len()),
    )]
    pub fn record_hubs(&mut self, hubs: &[usize]) -> Result<usize> {
        let vertex_count = self.network.vertex_count();
        if let Some(&hub) = hubs.iter().find(|&&hub| hub >= vertex_count) {
            return Err(PaverError::HubOutOfRange { hub, vertex_count });
        }

        let mut newly_marked = 0;
        for (index, &source) in hubs.iter().enumerate() {
            if hubs[..index].contains(&source) {
                continue;
            }
            let tree = self.network.shortest_paths(source)?;
            newly_marked += self.record_tree(&tree, hubs.iter().copied())?;
        }
        debug!(newly_marked, "hub paths recorded");
        Ok(newly_marked)
    }

    fn record_tree(
        &mut self,
        tree: &ShortestPathTree,
        destinations: impl IntoIterator<Item = usize>,
    ) -> Result<usize> {
        let mut newly_marked = 0;
        for destination in destinations {
            for position in self.network.path_edges(tree, destination)? {
                if !self.used[position] {
                    self.used[position] = true;
                    newly_marked += 1;
                }
            }
        }
        Ok(newly_marked)
    }

    /// Freezes the flags into a [`UsageReport`].
    #[must_use]
    pub fn finish(self) -> UsageReport {
        UsageReport {
            edges: self.network.edges().to_vec(),
            used: self.used,
        }
    }
}

/// Marks every edge of `edges` that lies on a shortest path between two hubs.
///
/// An empty hub list marks nothing.
///
/// # Errors
/// Returns [`PaverError::Graph`] when an edge references a vertex outside
/// `vertex_count` and [`PaverError::HubOutOfRange`] for an invalid hub.
///
/// # Examples
/// ```
/// use paver_core::{Graph, kruskal, mark_used_edges};
///
/// let graph = Graph::from_triples(
///     6,
///     [
///         (0, 1, 5), (0, 2, 3), (1, 2, 1), (1, 3, 4), (1, 4, 2),
///         (2, 3, 6), (3, 4, 2), (3, 5, 7), (4, 5, 3),
///     ],
/// )?;
/// let forest = kruskal(&graph)?;
/// let report = mark_used_edges(forest.edges(), forest.vertex_count(), &[2, 3, 5])?;
/// assert_eq!(report.painted_weight(), 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn mark_used_edges(
    edges: &[Edge],
    vertex_count: usize,
    hubs: &[usize],
) -> Result<UsageReport> {
    let network = RoadNetwork::new(edges, vertex_count)?;
    let mut usage = UsageAccumulator::new(&network);
    usage.record_hubs(hubs)?;
    Ok(usage.finish())
}

/// Used flags aligned with the edge list they were computed over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UsageReport {
    edges: Vec<Edge>,
    used: Vec<bool>,
}

impl UsageReport {
    /// Sums the weights of used edges, each counted once.
    #[must_use]
    pub fn painted_weight(&self) -> TotalWeight {
        self.used_edges()
            .map(|edge| TotalWeight::from(edge.weight()))
            .sum()
    }

    /// Returns whether the edge at `position` is used; out-of-range positions
    /// are unused.
    #[must_use]
    pub fn is_used(&self, position: usize) -> bool {
        self.used.get(position).copied().unwrap_or(false)
    }

    /// Returns the number of used edges.
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|used| **used).count()
    }

    /// Iterates over used edges in edge-list order.
    pub fn used_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .zip(&self.used)
            .filter_map(|(edge, used)| used.then_some(edge))
    }

    /// Iterates over every edge paired with its flag.
    pub fn marked_edges(&self) -> impl Iterator<Item = MarkedEdge> + '_ {
        self.edges
            .iter()
            .zip(&self.used)
            .map(|(&edge, &used)| MarkedEdge { edge, used })
    }
}

/// An edge together with its used flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MarkedEdge {
    edge: Edge,
    used: bool,
}

impl MarkedEdge {
    /// Returns the underlying edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.edge.source() }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.edge.destination() }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.edge.weight() }

    /// Returns whether the edge lies on a path between two hubs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_used(&self) -> bool { self.used }
}
