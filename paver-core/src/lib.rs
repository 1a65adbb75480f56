//! Paver core library.
//!
//! Builds the minimum spanning forest of a weighted, undirected graph and
//! finds the forest edges that lie on a shortest path between any two hubs.
//! The sum of those edges' weights is the plan's painted weight.
//!
//! ```
//! use paver_core::{Graph, PaverBuilder};
//!
//! let graph = Graph::from_triples(4, [(0, 1, 4), (1, 2, 3), (0, 2, 10), (2, 3, 1)])?;
//! let plan = PaverBuilder::new().with_hubs([0, 3]).build()?.run(&graph)?;
//! assert_eq!(plan.forest().total_weight(), 8);
//! assert_eq!(plan.painted_weight(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
#[cfg(feature = "generate")]
#[cfg_attr(docsrs, doc(cfg(feature = "generate")))]
mod generate;
mod graph;
mod mst;
mod paths;
mod paver;
mod plan;
mod usage;

#[cfg(feature = "generate")]
pub use crate::generate::{
    CAMPUS_EDGES, CAMPUS_HUBS, CAMPUS_VERTICES, GeneratorConfig, campus_graph,
    random_connected_graph,
};
pub use crate::{
    builder::PaverBuilder,
    error::{GraphError, GraphErrorCode, PaverError, PaverErrorCode, Result},
    graph::{Edge, Graph, TotalWeight, Weight},
    mst::{DisjointSet, SpanningForest, kruskal, kruskal_from_edges},
    paths::{RoadNetwork, ShortestPathTree, shortest_paths},
    paver::Paver,
    plan::PavingPlan,
    usage::{MarkedEdge, UsageAccumulator, UsageReport, mark_used_edges},
};
