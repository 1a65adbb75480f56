//! Benchmark parameter types.
//!
//! The `Display` impls feed `BenchmarkId::from_parameter`, so they double as
//! the labels in Criterion reports.

use std::fmt;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a hub usage benchmark run.
#[derive(Clone, Debug)]
pub struct UsageBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of hubs whose connecting paths are marked.
    pub hub_count: usize,
}

impl fmt::Display for UsageBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},hubs={}", self.vertex_count, self.hub_count)
    }
}
