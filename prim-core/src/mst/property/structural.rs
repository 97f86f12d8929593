//! Property 2: Structural invariant verification.
//!
//! For any tree produced by either Prim variant on a connected graph,
//! verifies:
//!
//! - **Validation** - [`validate_mst`] accepts the result.
//! - **Root** - the start vertex is the only vertex without a parent.
//! - **Edge count** - exactly `V - 1` parent links.
//! - **Acyclicity** - every parent chain ends at the start vertex.
//! - **Graph edges** - every parent link names an edge of the graph whose
//!   weight equals the recorded key.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstResult, prim_mst, prim_mst_simple, validate_mst};

use super::helpers::{mst_failure, walk_to_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
///
/// Disconnected fixtures are skipped; the equivalence property covers them.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    if !graph.is_connected() {
        return Ok(());
    }

    let heap = prim_mst(&graph, fixture.start).map_err(mst_failure("prim_mst", fixture))?;
    check_tree("prim_mst", &graph, &heap, fixture)?;

    let simple = prim_mst_simple(&graph, fixture.start)
        .map_err(mst_failure("prim_mst_simple", fixture))?;
    check_tree("prim_mst_simple", &graph, &simple, fixture)?;

    Ok(())
}

fn check_tree(
    variant: &str,
    graph: &Graph,
    result: &MstResult,
    fixture: &MstFixture,
) -> TestCaseResult {
    let fail = |msg: String| {
        TestCaseError::fail(format!("{variant}: {msg} ({})", fixture.describe()))
    };

    if !validate_mst(graph, result) {
        return Err(fail("validate_mst rejected the result".to_owned()));
    }
    if result.parent(fixture.start).is_some() {
        return Err(fail(format!("start vertex {} has a parent", fixture.start)));
    }

    let expected_edges = graph.vertex_count() - 1;
    if result.edge_count() != expected_edges {
        return Err(fail(format!(
            "expected {expected_edges} tree edges, found {}",
            result.edge_count()
        )));
    }

    for vertex in 0..graph.vertex_count() {
        match walk_to_root(result, vertex) {
            Some(root) if root == fixture.start => {}
            Some(root) => {
                return Err(fail(format!("vertex {vertex} reaches root {root}")));
            }
            None => return Err(fail(format!("parent chain from {vertex} cycles"))),
        }
    }

    for edge in result.edges() {
        if graph.weight(edge.parent(), edge.child()) != Some(edge.weight()) {
            return Err(fail(format!(
                "tree edge {} -- {} weighs {} but the graph has {:?}",
                edge.parent(),
                edge.child(),
                edge.weight(),
                graph.weight(edge.parent(), edge.child()),
            )));
        }
    }

    Ok(())
}
