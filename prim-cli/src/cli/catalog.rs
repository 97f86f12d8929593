//! Built-in demonstration graphs.

use prim_core::{Graph, GraphError, Weight};

/// One of the three demonstration graphs selectable by number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExampleGraph {
    /// Four vertices with a single heavy chord; the tree weighs 19.
    Simple,
    /// Five densely connected vertices; the tree weighs 16.
    Complete,
    /// Six vertices laid out as a path with two shortcuts; the tree weighs 32.
    Linear,
}

const SIMPLE_EDGES: &[(usize, usize, Weight)] =
    &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)];

const COMPLETE_EDGES: &[(usize, usize, Weight)] = &[
    (0, 1, 2),
    (0, 3, 6),
    (1, 2, 3),
    (1, 3, 8),
    (1, 4, 5),
    (2, 4, 7),
    (3, 4, 9),
];

const LINEAR_EDGES: &[(usize, usize, Weight)] = &[
    (0, 1, 4),
    (1, 2, 8),
    (2, 3, 7),
    (3, 4, 9),
    (4, 5, 10),
    (2, 5, 4),
    (3, 5, 14),
];

impl ExampleGraph {
    /// Maps the 1-based menu number to a catalogue entry.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Simple),
            2 => Some(Self::Complete),
            3 => Some(Self::Linear),
            _ => None,
        }
    }

    /// Heading printed above the run.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Simple => "Example 1: simple 4-vertex graph",
            Self::Complete => "Example 2: complete 5-vertex graph",
            Self::Linear => "Example 3: linear graph with cycles",
        }
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Simple => 4,
            Self::Complete => 5,
            Self::Linear => 6,
        }
    }

    /// Edge triples in insertion order.
    #[must_use]
    pub const fn edges(self) -> &'static [(usize, usize, Weight)] {
        match self {
            Self::Simple => SIMPLE_EDGES,
            Self::Complete => COMPLETE_EDGES,
            Self::Linear => LINEAR_EDGES,
        }
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// Never fails for the built-in tables; the [`GraphError`] is propagated
    /// rather than unwrapped.
    pub fn build(self) -> Result<Graph, GraphError> {
        Graph::from_edges(self.vertex_count(), self.edges())
    }
}
