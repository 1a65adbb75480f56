//! Property 3: Determinism.
//!
//! Kruskal over the same input must return the identical edge list every
//! time; equal weights are resolved by insertion order alone.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;

use super::types::MstFixture;

const REPETITIONS: usize = 4;

/// Runs Kruskal repeatedly and asserts identical forests.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let baseline = kruskal(&graph)
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe())))?;

    for run in 1..REPETITIONS {
        let result = kruskal(&graph).map_err(|e| {
            TestCaseError::fail(format!("run {run} failed: {e} ({})", fixture.describe()))
        })?;
        if result != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run} diverged from baseline ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}
