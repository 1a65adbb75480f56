//! Seeded graph generators.
//!
//! Weights are drawn uniformly from `[min_weight, max_weight]`. Passing the
//! same seeded [`SmallRng`] yields the same graph.

use rand::{Rng, rngs::SmallRng, seq::SliceRandom};
use tracing::debug;

use crate::{
    Result,
    error::PaverError,
    graph::{Edge, Graph, Weight},
};

/// Number of sites in the campus topology.
pub const CAMPUS_VERTICES: usize = 6;

/// Connections of the campus topology.
pub const CAMPUS_EDGES: [(usize, usize); 9] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (3, 4),
    (3, 5),
    (4, 5),
];

/// Default hubs for the campus topology.
pub const CAMPUS_HUBS: [usize; 3] = [2, 3, 5];

/// Inclusive weight bounds for generated edges.
///
/// # Examples
/// ```
/// use paver_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!((config.min_weight, config.max_weight), (1, 10));
/// assert!(GeneratorConfig { min_weight: 4, max_weight: 2 }.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Smallest weight that may be drawn.
    pub min_weight: Weight,
    /// Largest weight that may be drawn.
    pub max_weight: Weight,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_weight: 1,
            max_weight: 10,
        }
    }
}

impl GeneratorConfig {
    /// Checks that the weight range is non-empty.
    ///
    /// # Errors
    /// Returns [`PaverError::InvalidWeightRange`] when
    /// `min_weight > max_weight`.
    pub const fn validate(&self) -> Result<()> {
        if self.min_weight > self.max_weight {
            return Err(PaverError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }

    fn draw(&self, rng: &mut SmallRng) -> Weight {
        rng.gen_range(self.min_weight..=self.max_weight)
    }
}

/// Builds the six-site campus graph with random weights.
///
/// # Errors
/// Returns [`PaverError::InvalidWeightRange`] for an empty weight range.
///
/// # Examples
/// ```
/// use paver_core::{CAMPUS_EDGES, GeneratorConfig, campus_graph};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = campus_graph(&GeneratorConfig::default(), &mut rng)?;
/// assert_eq!(graph.vertex_count(), 6);
/// assert_eq!(graph.edges().len(), CAMPUS_EDGES.len());
/// assert!(graph.edges().iter().all(|edge| (1..=10).contains(&edge.weight())));
/// # Ok::<(), paver_core::PaverError>(())
/// ```
pub fn campus_graph(config: &GeneratorConfig, rng: &mut SmallRng) -> Result<Graph> {
    config.validate()?;
    let mut graph = Graph::new(CAMPUS_VERTICES)?;
    for (source, destination) in CAMPUS_EDGES {
        graph.insert_edge(Edge::new(source, destination, config.draw(rng)))?;
    }
    Ok(graph)
}

/// Builds a connected graph: a random spanning path over a shuffled vertex
/// order plus `extra_edges` random non-loop edges.
///
/// # Errors
/// Returns [`PaverError::InvalidWeightRange`] for an empty weight range and
/// [`PaverError::Graph`] when `vertex_count == 0`.
pub fn random_connected_graph(
    vertex_count: usize,
    extra_edges: usize,
    config: &GeneratorConfig,
    rng: &mut SmallRng,
) -> Result<Graph> {
    config.validate()?;
    let mut graph = Graph::new(vertex_count)?;

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        graph.insert_edge(Edge::new(pair[0], pair[1], config.draw(rng)))?;
    }

    if vertex_count > 1 {
        for _ in 0..extra_edges {
            let source = rng.gen_range(0..vertex_count);
            let mut destination = rng.gen_range(0..vertex_count - 1);
            if destination >= source {
                destination += 1;
            }
            graph.insert_edge(Edge::new(source, destination, config.draw(rng)))?;
        }
    }

    debug!(
        vertices = vertex_count,
        edges = graph.edges().len(),
        "random connected graph generated"
    );
    Ok(graph)
}
