//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::{Graph, Weight};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the Prim implementations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight, so the MST is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with roughly `1.5n` to `2n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(src, dest, weight)` triples, possibly repeating a pair.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
    /// Vertex from which both Prim variants start.
    pub start: usize,
}

impl MstFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        match Graph::from_edges(self.vertex_count, &self.edges) {
            Ok(graph) => graph,
            Err(err) => panic!(
                "generated fixture must be valid: {err} (distribution={:?})",
                self.distribution
            ),
        }
    }

    /// Returns a short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}, start={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
            self.start,
        )
    }
}
