//! Property 1: Equivalence with independent oracles.
//!
//! Kruskal must match the total weight, edge count, and component count of
//! dense Prim on every fixture, and of exhaustive search on small ones.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::oracle::{OracleForest, exhaustive_minimum, prim};
use super::strategies::EXHAUSTIVE_MAX_VERTICES;
use super::types::MstFixture;

/// Compares Kruskal with dense Prim.
pub(super) fn run_prim_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = prim(fixture.vertex_count, &fixture.edges);
    compare(fixture, &oracle, "prim")
}

/// Compares Kruskal with exhaustive search; skips graphs that are too large.
pub(super) fn run_exhaustive_minimality_property(fixture: &MstFixture) -> TestCaseResult {
    if fixture.vertex_count > EXHAUSTIVE_MAX_VERTICES {
        return Ok(());
    }
    let oracle = exhaustive_minimum(fixture.vertex_count, &fixture.edges);
    compare(fixture, &oracle, "exhaustive")
}

fn compare(fixture: &MstFixture, oracle: &OracleForest, label: &str) -> TestCaseResult {
    let forest = kruskal(&fixture.graph())
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe())))?;

    let actual = OracleForest {
        total_weight: forest.total_weight(),
        edge_count: forest.edges().len(),
        component_count: forest.component_count(),
    };
    if &actual != oracle {
        return Err(TestCaseError::fail(format!(
            "kruskal={actual:?}, {label}={oracle:?} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
