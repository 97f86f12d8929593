//! Dense undirected weighted graph.
//!
//! The graph stores a symmetric distance matrix in a single row-major buffer.
//! Missing edges hold [`INFINITE_WEIGHT`], which callers can never insert, so
//! the sentinel cannot collide with a real edge.

use tracing::{debug, instrument};

use crate::error::GraphError;

/// Integer edge weight.
pub type Weight = i64;

/// Reserved distance marking the absence of an edge.
pub const INFINITE_WEIGHT: Weight = Weight::MAX;

/// Largest weight accepted by [`Graph::add_edge`].
///
/// Any spanning tree of a graph that fits in memory sums to well below
/// [`INFINITE_WEIGHT`] with this bound.
pub const MAX_EDGE_WEIGHT: Weight = (1 << 31) - 1;

/// An undirected graph over a fixed vertex set backed by a dense matrix.
///
/// # Examples
/// ```
/// use prim_core::Graph;
///
/// let mut graph = Graph::new(3).expect("three vertices is a valid size");
/// graph.add_edge(0, 1, 4).expect("edge is valid");
/// assert!(!graph.is_connected());
/// graph.add_edge(1, 2, 2).expect("edge is valid");
/// assert!(graph.is_connected());
/// assert_eq!(graph.weight(1, 0), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    distances: Vec<Weight>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let mut distances = vec![INFINITE_WEIGHT; vertex_count.saturating_mul(vertex_count)];
        for vertex in 0..vertex_count {
            if let Some(cell) = distances.get_mut(vertex * vertex_count + vertex) {
                *cell = 0;
            }
        }
        debug!(vertex_count, "created graph");
        Ok(Self {
            vertex_count,
            distances,
        })
    }

    /// Creates a graph and inserts every `(src, dest, weight)` triple in order.
    ///
    /// # Errors
    /// Propagates the first error raised by [`Self::new`] or [`Self::add_edge`].
    ///
    /// # Examples
    /// ```
    /// use prim_core::Graph;
    ///
    /// let graph = Graph::from_edges(3, &[(0, 1, 1), (1, 2, 5)]).expect("edges are valid");
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(usize, usize, Weight)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for &(src, dest, weight) in edges {
            graph.add_edge(src, dest, weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Inserts or overwrites the undirected edge between `src` and `dest`.
    ///
    /// A self-loop is accepted and ignored. Re-adding an existing pair
    /// replaces its weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex, [`GraphError::NegativeWeight`] for weights below zero and
    /// [`GraphError::WeightOutOfRange`] for weights above [`MAX_EDGE_WEIGHT`].
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { src, dest, weight });
        }
        if weight > MAX_EDGE_WEIGHT {
            return Err(GraphError::WeightOutOfRange {
                src,
                dest,
                weight,
                max: MAX_EDGE_WEIGHT,
            });
        }
        if src == dest {
            debug!(vertex = src, "self-loop ignored");
            return Ok(());
        }

        let forward = self.cell(src, dest);
        let backward = self.cell(dest, src);
        for index in [forward, backward] {
            if let Some(slot) = self.distances.get_mut(index) {
                *slot = weight;
            }
        }
        debug!(src, dest, weight, "added edge");
        Ok(())
    }

    /// Returns the raw matrix entry for `(src, dest)`.
    ///
    /// The diagonal reads `0` and missing edges read [`INFINITE_WEIGHT`].
    /// Out-of-range indices yield `None`.
    #[must_use]
    pub fn distance(&self, src: usize, dest: usize) -> Option<Weight> {
        if src >= self.vertex_count || dest >= self.vertex_count {
            return None;
        }
        self.distances.get(self.cell(src, dest)).copied()
    }

    /// Returns the weight of the edge between `src` and `dest`, if any.
    ///
    /// A vertex is at distance `0` from itself, so `weight(v, v)` is `Some(0)`.
    #[must_use]
    pub fn weight(&self, src: usize, dest: usize) -> Option<Weight> {
        self.distance(src, dest)
            .filter(|&distance| distance != INFINITE_WEIGHT)
    }

    /// Iterates over the neighbours of `vertex` in ascending index order.
    ///
    /// Yields nothing when `vertex` is out of range.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let row: &[Weight] = if vertex < self.vertex_count {
            let start = vertex * self.vertex_count;
            self.distances
                .get(start..start + self.vertex_count)
                .unwrap_or_default()
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(move |&(other, &distance)| other != vertex && distance != INFINITE_WEIGHT)
            .map(|(other, &distance)| (other, distance))
    }

    /// Iterates over every undirected edge once as `(src, dest, weight)` with
    /// `src < dest`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        (0..self.vertex_count).flat_map(move |src| {
            self.neighbours(src)
                .filter(move |&(dest, _)| dest > src)
                .map(move |(dest, weight)| (src, dest, weight))
        })
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Reports whether every vertex is reachable from vertex `0`.
    ///
    /// Uses an explicit stack rather than recursion so depth does not grow
    /// with the vertex count. A single vertex is trivially connected.
    #[must_use]
    #[instrument(
        name = "core.is_connected",
        level = "trace",
        skip(self),
        fields(vertex_count = self.vertex_count),
    )]
    pub fn is_connected(&self) -> bool {
        if self.vertex_count == 1 {
            return true;
        }

        let mut visited = vec![false; self.vertex_count];
        let mut stack = Vec::with_capacity(self.vertex_count);
        if let Some(root) = visited.first_mut() {
            *root = true;
        }
        stack.push(0);
        let mut visited_count = 1;

        while let Some(current) = stack.pop() {
            for (next, _) in self.neighbours(current) {
                if let Some(seen) = visited.get_mut(next)
                    && !*seen
                {
                    *seen = true;
                    visited_count += 1;
                    stack.push(next);
                }
            }
        }

        visited_count == self.vertex_count
    }

    const fn cell(&self, row: usize, column: usize) -> usize {
        row * self.vertex_count + column
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}
