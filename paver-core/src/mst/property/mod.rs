//! Property-based tests for the Kruskal MST implementation.
//!
//! Verifies Kruskal against independent oracles (exhaustive search on small
//! graphs, dense Prim on larger ones), validates structural invariants
//! (acyclicity, connectivity, edge count), and checks that repeated runs
//! over the same input yield identical forests.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
