//! Independent re-derivation of an MST result against its source graph.
//!
//! Validation never fails loudly: every inconsistency becomes an
//! [`MstViolation`] and [`validate_mst`] collapses them into a boolean. All
//! checks run even after the first violation so callers see the full picture.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::graph::{Graph, Weight};

use super::MstResult;

/// A structural inconsistency found by [`inspect_mst`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstViolation {
    /// The result and the graph disagree on the vertex count.
    #[error("result covers {result} vertices but the graph has {graph}")]
    VertexCountMismatch {
        /// Vertex count of the graph.
        graph: usize,
        /// Vertex count recorded in the result.
        result: usize,
    },
    /// The result holds a different number of keys and parent links.
    #[error("result holds {keys} keys for {parents} parent links")]
    KeyCountMismatch {
        /// Number of parent links.
        parents: usize,
        /// Number of keys.
        keys: usize,
    },
    /// A parent link points outside the graph.
    #[error("vertex {vertex} has out-of-range parent {parent}")]
    ParentOutOfRange {
        /// The vertex holding the bad link.
        vertex: usize,
        /// The recorded parent.
        parent: usize,
    },
    /// A vertex names itself as its parent.
    #[error("vertex {vertex} is its own parent")]
    SelfParent {
        /// The vertex holding the bad link.
        vertex: usize,
    },
    /// The recorded key differs from the graph's edge weight.
    #[error(
        "edge {parent} -- {vertex} weighs {expected:?} in the graph but the result records {recorded:?}"
    )]
    WeightMismatch {
        /// The child vertex.
        vertex: usize,
        /// Its recorded parent.
        parent: usize,
        /// Weight in the graph, `None` when no such edge exists.
        expected: Option<Weight>,
        /// Key recorded in the result, `None` when missing.
        recorded: Option<Weight>,
    },
    /// A spanning tree must have exactly `vertex_count - 1` edges.
    #[error("result has {actual} edges but a spanning tree needs {expected}")]
    EdgeCountMismatch {
        /// Required edge count.
        expected: usize,
        /// Number of vertices with a parent.
        actual: usize,
    },
    /// The recorded total differs from the sum of recorded keys.
    #[error("recorded total weight {recorded} differs from the summed keys {computed:?}")]
    TotalWeightMismatch {
        /// Sum of recorded keys, `None` when the sum overflows.
        computed: Option<Weight>,
        /// Total weight stored in the result.
        recorded: Weight,
    },
}

/// Collects every inconsistency between `result` and `graph`.
///
/// # Examples
/// ```
/// use prim_core::{Graph, MstResult, MstViolation, inspect_mst};
///
/// let graph = Graph::from_edges(2, &[(0, 1, 7)]).expect("edge is valid");
/// let result = MstResult::from_parts(vec![None, Some(0)], vec![0, 7], 8);
/// assert_eq!(
///     inspect_mst(&graph, &result),
///     vec![MstViolation::TotalWeightMismatch { computed: Some(7), recorded: 8 }],
/// );
/// ```
#[must_use]
#[instrument(
    name = "core.validate_mst",
    skip(graph, result),
    fields(vertex_count = graph.vertex_count(), total_weight = result.total_weight()),
)]
pub fn inspect_mst(graph: &Graph, result: &MstResult) -> Vec<MstViolation> {
    let mut violations = Vec::new();
    let vertex_count = result.vertex_count();

    if graph.vertex_count() != vertex_count {
        violations.push(MstViolation::VertexCountMismatch {
            graph: graph.vertex_count(),
            result: vertex_count,
        });
    }
    if result.keys().len() != vertex_count {
        violations.push(MstViolation::KeyCountMismatch {
            parents: vertex_count,
            keys: result.keys().len(),
        });
    }

    let mut edge_count = 0_usize;
    let mut computed: Option<Weight> = Some(0);
    for (vertex, link) in result.parents().iter().enumerate() {
        let Some(parent) = *link else {
            continue;
        };
        edge_count += 1;
        let recorded = result.key(vertex);
        computed = computed
            .zip(recorded)
            .and_then(|(sum, key)| sum.checked_add(key));
        check_link(graph, vertex, parent, recorded, &mut violations);
    }

    let expected_edges = vertex_count.saturating_sub(1);
    if edge_count != expected_edges {
        violations.push(MstViolation::EdgeCountMismatch {
            expected: expected_edges,
            actual: edge_count,
        });
    }
    if computed != Some(result.total_weight()) {
        violations.push(MstViolation::TotalWeightMismatch {
            computed,
            recorded: result.total_weight(),
        });
    }

    for violation in &violations {
        debug!(%violation, "MST validation failed");
    }
    violations
}

fn check_link(
    graph: &Graph,
    vertex: usize,
    parent: usize,
    recorded: Option<Weight>,
    violations: &mut Vec<MstViolation>,
) {
    if parent >= graph.vertex_count() {
        violations.push(MstViolation::ParentOutOfRange { vertex, parent });
        return;
    }
    if parent == vertex {
        violations.push(MstViolation::SelfParent { vertex });
        return;
    }
    let expected = graph.weight(parent, vertex);
    if expected.is_none() || expected != recorded {
        violations.push(MstViolation::WeightMismatch {
            vertex,
            parent,
            expected,
            recorded,
        });
    }
}

/// Reports whether `result` is a consistent spanning tree of `graph`.
///
/// Returns `false` rather than panicking on any inconsistency, which makes
/// it safe to run on hand-built or corrupted results.
///
/// # Examples
/// ```
/// use prim_core::{Graph, prim_mst, validate_mst};
///
/// let graph = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 2)]).expect("edges are valid");
/// let result = prim_mst(&graph, 0).expect("graph is connected");
/// assert!(validate_mst(&graph, &result));
/// ```
#[must_use]
pub fn validate_mst(graph: &Graph, result: &MstResult) -> bool {
    inspect_mst(graph, result).is_empty()
}
