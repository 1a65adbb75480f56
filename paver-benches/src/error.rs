//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use paver_core::{GraphError, PaverError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation or pipeline execution failed.
    #[error("paver operation failed: {0}")]
    Paver(#[from] PaverError),
    /// Spanning forest computation failed.
    #[error("spanning forest computation failed: {0}")]
    Graph(#[from] GraphError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// More hubs were requested than the graph has vertices.
    #[error("requested {hubs} hubs from a graph with {vertices} vertices")]
    TooManyHubs {
        /// Requested hub count.
        hubs: usize,
        /// Vertices available in the generated graph.
        vertices: usize,
    },
}
