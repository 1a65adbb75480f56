//! Property 2: Structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Acyclicity**: no cycles (union-find based detection).
//! - **Connectivity**: components match the input graph's components.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **No self-loops**: `source != destination` for all edges.
//! - **Provenance**: every forest edge occurs in the input.
//! - **Sorted acceptance**: weights are non-decreasing in output order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, kruskal};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph())
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe())))?;
    let edges = forest.edges();

    validate_edges(edges, |i, edge| {
        edge.is_self_loop()
            .then(|| format!("edge {i}: self-loop on vertex {}", edge.source()))
    })?;
    validate_edges(edges, |i, edge| {
        (!fixture.edges.contains(edge)).then(|| format!("edge {i}: {edge:?} not in input"))
    })?;
    validate_sorted(edges)?;
    validate_acyclicity(fixture.vertex_count, edges)?;

    let input_components = count_components(
        fixture.vertex_count,
        fixture.edges.iter().map(Edge::endpoints),
    );
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {input_components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    let expected = fixture.vertex_count - input_components;
    if edges.len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} ({})",
            edges.len(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Generic edge validator that applies a predicate to each edge, returning
/// early with an error if the predicate produces a message.
fn validate_edges<F>(edges: &[Edge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &Edge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

fn validate_sorted(edges: &[Edge]) -> TestCaseResult {
    for (i, pair) in edges.windows(2).enumerate() {
        if pair[0].weight() > pair[1].weight() {
            return Err(TestCaseError::fail(format!(
                "edge {} (weight {}) accepted after heavier edge (weight {})",
                i + 1,
                pair[1].weight(),
                pair[0].weight(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the forest using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.destination());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.destination(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}
