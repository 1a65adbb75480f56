//! Seeded graph workloads for benchmarking.
//!
//! A workload is a connected random graph plus a hub set sampled without
//! replacement from its vertices. The same configuration always yields the
//! same workload.

use paver_core::{Graph, GeneratorConfig, random_connected_graph};
use rand::{SeedableRng, rngs::SmallRng, seq::index};

use crate::error::BenchSetupError;

/// Shape of a generated workload.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges added on top of the spanning path that keeps the graph connected.
    pub extra_edges: usize,
    /// Number of distinct hubs to sample.
    pub hub_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated graph together with its hubs.
#[derive(Clone, Debug)]
pub struct Workload {
    graph: Graph,
    hubs: Vec<usize>,
}

impl Workload {
    /// Generates a workload from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the vertex or hub count is
    /// zero, [`BenchSetupError::TooManyHubs`] when more hubs than vertices are
    /// requested, and [`BenchSetupError::Paver`] if graph generation fails.
    pub fn generate(config: &WorkloadConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.hub_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "hub_count",
            });
        }
        if config.hub_count > config.vertex_count {
            return Err(BenchSetupError::TooManyHubs {
                hubs: config.hub_count,
                vertices: config.vertex_count,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let graph = random_connected_graph(
            config.vertex_count,
            config.extra_edges,
            &GeneratorConfig::default(),
            &mut rng,
        )?;
        let hubs = index::sample(&mut rng, config.vertex_count, config.hub_count).into_vec();
        Ok(Self { graph, hubs })
    }

    /// Generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Sampled hubs, in sampling order.
    #[must_use]
    pub const fn hubs(&self) -> &[usize] {
        self.hubs.as_slice()
    }
}
