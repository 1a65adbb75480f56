//! Pipeline orchestration for the Paver library.
//!
//! [`Paver::run`] builds the minimum spanning forest of a graph, indexes it
//! once and marks the forest edges that connect the configured hubs.

use tracing::{info, instrument};

use crate::{
    Result,
    error::PaverError,
    graph::Graph,
    mst::kruskal,
    paths::RoadNetwork,
    plan::PavingPlan,
    usage::UsageAccumulator,
};

/// Entry point for running the paving pipeline.
///
/// # Examples
/// ```
/// use paver_core::{Graph, PaverBuilder};
///
/// let graph = Graph::from_triples(
///     6,
///     [
///         (0, 1, 5), (0, 2, 3), (1, 2, 1), (1, 3, 4), (1, 4, 2),
///         (2, 3, 6), (3, 4, 2), (3, 5, 7), (4, 5, 3),
///     ],
/// )?;
/// let paver = PaverBuilder::new().with_hubs([2, 3, 5]).build()?;
/// let plan = paver.run(&graph)?;
/// assert_eq!(plan.forest().total_weight(), 11);
/// assert_eq!(plan.painted_weight(), 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Paver {
    hubs: Vec<usize>,
}

impl Paver {
    pub(crate) fn new(hubs: Vec<usize>) -> Self {
        Self { hubs }
    }

    /// Returns the hubs this instance connects, in configuration order.
    #[must_use]
    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    /// Runs the pipeline against `graph`.
    ///
    /// A disconnected graph is not an error: hubs in different components
    /// simply contribute no painted edges.
    ///
    /// # Errors
    /// Returns [`PaverError::HubOutOfRange`] when a hub is not a vertex of
    /// `graph`.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edges().len(),
            hubs = self.hubs.len(),
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<PavingPlan> {
        let vertex_count = graph.vertex_count();
        if let Some(&hub) = self.hubs.iter().find(|&&hub| hub >= vertex_count) {
            return Err(PaverError::HubOutOfRange { hub, vertex_count });
        }

        let forest = kruskal(graph)?;
        let network = RoadNetwork::new(forest.edges(), vertex_count)?;
        let mut usage = UsageAccumulator::new(&network);
        usage.record_hubs(&self.hubs)?;
        let usage = usage.finish();

        info!(
            forest_weight = forest.total_weight(),
            components = forest.component_count(),
            painted_weight = usage.painted_weight(),
            "paving plan computed"
        );
        Ok(PavingPlan::new(forest, usage, self.hubs.clone()))
    }
}
