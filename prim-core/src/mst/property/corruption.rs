//! Property 3: Corruption detection.
//!
//! Any single tampered key in an otherwise valid result must be rejected by
//! the validator, as must a shifted total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{MstResult, Weight, inspect_mst, prim_mst};

use super::helpers::mst_failure;
use super::types::MstFixture;

/// Adds `delta` to the key of the `pick`-th tree edge and checks that the
/// validator notices. Also shifts the total weight alone by `delta`.
///
/// Fixtures without tree edges are skipped.
pub(super) fn run_corruption_detection_property(
    fixture: &MstFixture,
    pick: usize,
    delta: Weight,
) -> TestCaseResult {
    let graph = fixture.graph();
    if !graph.is_connected() || graph.vertex_count() < 2 {
        return Ok(());
    }
    let result = prim_mst(&graph, fixture.start).map_err(mst_failure("prim_mst", fixture))?;

    let children: Vec<usize> = result.edges().map(|edge| edge.child()).collect();
    let victim = children[pick % children.len()];

    let mut keys = result.keys().to_vec();
    keys[victim] += delta;
    let tampered_key =
        MstResult::from_parts(result.parents().to_vec(), keys, result.total_weight());
    if inspect_mst(&graph, &tampered_key).is_empty() {
        return Err(TestCaseError::fail(format!(
            "key of vertex {victim} shifted by {delta} went unnoticed ({})",
            fixture.describe()
        )));
    }

    let tampered_total = MstResult::from_parts(
        result.parents().to_vec(),
        result.keys().to_vec(),
        result.total_weight() + delta,
    );
    if inspect_mst(&graph, &tampered_total).is_empty() {
        return Err(TestCaseError::fail(format!(
            "total weight shifted by {delta} went unnoticed ({})",
            fixture.describe()
        )));
    }

    Ok(())
}
