//! Minimum spanning tree (MST) construction with Prim's algorithm.
//!
//! Two interchangeable variants are provided. [`prim_mst`] drives the
//! frontier through a [`VertexQueue`], while [`prim_mst_simple`] finds the
//! next vertex with a linear scan. Both grow the tree from a caller-chosen
//! start vertex and refuse disconnected graphs.
//!
//! Relaxation uses a strict `<` comparison, so the first vertex to offer a
//! given minimal key keeps the parent assignment.

mod validate;

use std::fmt;

use tracing::{info, instrument, trace};

use crate::{
    error::MstError,
    graph::{Graph, INFINITE_WEIGHT, Weight},
    queue::VertexQueue,
};

pub use self::validate::{MstViolation, inspect_mst, validate_mst};

/// Per-vertex progress while the quadratic variant grows a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum VertexState {
    /// No tree vertex has offered an edge yet.
    Unvisited,
    /// Reachable through a tree edge with a finite key, not yet fixed.
    Frontier,
    /// Part of the tree; its key and parent are final.
    Fixed,
}

/// Selects which Prim variant computes the tree.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Binary-heap driven Prim (`O(E log V)` queue work).
    #[default]
    Heap,
    /// Quadratic Prim using a linear minimum scan (`O(V²)`).
    Simple,
}

impl Algorithm {
    /// Returns a stable identifier suitable for logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heap => "heap",
            Self::Simple => "simple",
        }
    }

    /// Runs the selected variant on `graph` from `start`.
    ///
    /// # Errors
    /// See [`prim_mst`] and [`prim_mst_simple`].
    ///
    /// # Examples
    /// ```
    /// use prim_core::{Algorithm, Graph};
    ///
    /// let graph = Graph::from_edges(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 9)])
    ///     .expect("edges are valid");
    /// let heap = Algorithm::Heap.run(&graph, 0).expect("graph is connected");
    /// let simple = Algorithm::Simple.run(&graph, 0).expect("graph is connected");
    /// assert_eq!(heap.total_weight(), 5);
    /// assert_eq!(simple.total_weight(), 5);
    /// ```
    pub fn run(self, graph: &Graph, start: usize) -> Result<MstResult, MstError> {
        match self {
            Self::Heap => prim_mst(graph, start),
            Self::Simple => prim_mst_simple(graph, start),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tree edge joining `child` to its `parent`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MstEdge {
    parent: usize,
    child: usize,
    weight: Weight,
}

impl MstEdge {
    /// Returns the vertex that connected `child` into the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the vertex attached by this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Parent links and connecting weights describing a spanning tree.
///
/// Results produced by [`prim_mst`] and [`prim_mst_simple`] always satisfy
/// [`validate_mst`]. Hand-built results from [`Self::from_parts`] may not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MstResult {
    parents: Vec<Option<usize>>,
    keys: Vec<Weight>,
    total_weight: Weight,
}

impl MstResult {
    fn unreached(vertex_count: usize) -> Self {
        Self {
            parents: vec![None; vertex_count],
            keys: vec![INFINITE_WEIGHT; vertex_count],
            total_weight: 0,
        }
    }

    /// Assembles a result from raw parts without checking consistency.
    ///
    /// Pair this with [`validate_mst`] when the parts come from an untrusted
    /// source.
    ///
    /// # Examples
    /// ```
    /// use prim_core::{Graph, MstResult, validate_mst};
    ///
    /// let graph = Graph::from_edges(2, &[(0, 1, 7)]).expect("edge is valid");
    /// let result = MstResult::from_parts(vec![None, Some(0)], vec![0, 7], 7);
    /// assert!(validate_mst(&graph, &result));
    /// ```
    #[must_use]
    pub const fn from_parts(
        parents: Vec<Option<usize>>,
        keys: Vec<Weight>,
        total_weight: Weight,
    ) -> Self {
        Self {
            parents,
            keys,
            total_weight,
        }
    }

    /// Returns the number of vertices described by the result.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the summed weight of all tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the parent of `vertex`, or `None` for the root and for
    /// out-of-range ids.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the recorded key of `vertex`.
    ///
    /// The key is the weight of the edge to the parent and is only
    /// meaningful when [`Self::parent`] is `Some`.
    #[must_use]
    pub fn key(&self, vertex: usize) -> Option<Weight> {
        self.keys.get(vertex).copied()
    }

    /// Returns every parent link, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<usize>] { &self.parents }

    /// Returns every recorded key, indexed by vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn keys(&self) -> &[Weight] { &self.keys }

    /// Returns the number of vertices with a parent.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.parents.iter().filter(|parent| parent.is_some()).count()
    }

    /// Iterates over tree edges ordered by child vertex.
    pub fn edges(&self) -> impl Iterator<Item = MstEdge> + '_ {
        self.parents
            .iter()
            .zip(&self.keys)
            .enumerate()
            .filter_map(|(child, (parent, &weight))| {
                parent.map(|parent_vertex| MstEdge {
                    parent: parent_vertex,
                    child,
                    weight,
                })
            })
    }

    fn record(&mut self, vertex: usize, parent: usize, key: Weight) {
        if let Some(slot) = self.parents.get_mut(vertex) {
            *slot = Some(parent);
        }
        self.set_key(vertex, key);
    }

    fn set_key(&mut self, vertex: usize, key: Weight) {
        if let Some(slot) = self.keys.get_mut(vertex) {
            *slot = key;
        }
    }

    fn key_or_infinite(&self, vertex: usize) -> Weight {
        self.key(vertex).unwrap_or(INFINITE_WEIGHT)
    }
}

fn check_preconditions(graph: &Graph, start: usize) -> Result<(), MstError> {
    let vertex_count = graph.vertex_count();
    if start >= vertex_count {
        return Err(MstError::InvalidStartVertex {
            vertex: start,
            vertex_count,
        });
    }
    if !graph.is_connected() {
        return Err(MstError::NotConnected { vertex_count });
    }
    Ok(())
}

/// Fixes `vertex` into the tree, adding its key to the total unless it is
/// the root.
fn fix_vertex(result: &mut MstResult, vertex: usize, start: usize) {
    let key = result.key_or_infinite(vertex);
    if vertex != start {
        result.total_weight += key;
    }
    trace!(vertex, key, "fixed vertex");
}

/// Computes an MST with a binary-heap driven Prim's algorithm.
///
/// Every vertex enters the queue up front with an infinite key (the start
/// vertex with `0`), and exactly `vertex_count` extractions follow. Queue
/// membership alone marks a vertex as not yet fixed.
///
/// # Errors
/// Returns [`MstError::InvalidStartVertex`] when `start` is not a vertex and
/// [`MstError::NotConnected`] when the graph has several components.
/// [`MstError::Queue`] signals an internal logic error.
///
/// # Examples
/// ```
/// use prim_core::{Graph, prim_mst};
///
/// let graph = Graph::from_edges(
///     4,
///     &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
/// )
/// .expect("edges are valid");
/// let result = prim_mst(&graph, 0).expect("graph is connected");
/// assert_eq!(result.total_weight(), 19);
/// ```
#[instrument(
    name = "core.prim_mst",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn prim_mst(graph: &Graph, start: usize) -> Result<MstResult, MstError> {
    check_preconditions(graph, start)?;

    let vertex_count = graph.vertex_count();
    let mut result = MstResult::unreached(vertex_count);
    let mut queue = VertexQueue::with_capacity(vertex_count)?;

    result.set_key(start, 0);
    for vertex in 0..vertex_count {
        queue.insert(vertex, result.key_or_infinite(vertex))?;
    }

    while !queue.is_empty() {
        let current = queue.extract_min()?;
        fix_vertex(&mut result, current, start);

        for (next, weight) in graph.neighbours(current) {
            if queue.contains(next) && weight < result.key_or_infinite(next) {
                result.record(next, current, weight);
                queue.decrease_key(next, weight)?;
                trace!(vertex = next, parent = current, key = weight, "relaxed vertex");
            }
        }
    }

    info!(total_weight = result.total_weight, "heap prim completed");
    Ok(result)
}

/// Computes an MST with the quadratic Prim's algorithm.
///
/// Each of the `vertex_count` rounds scans every unfixed vertex for the
/// smallest finite key, preferring the lowest index on ties.
///
/// # Errors
/// Returns [`MstError::InvalidStartVertex`] when `start` is not a vertex and
/// [`MstError::NotConnected`] when the graph has several components.
///
/// # Examples
/// ```
/// use prim_core::{Graph, prim_mst_simple};
///
/// let graph = Graph::from_edges(
///     4,
///     &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
/// )
/// .expect("edges are valid");
/// let result = prim_mst_simple(&graph, 0).expect("graph is connected");
/// assert_eq!(result.total_weight(), 19);
/// assert_eq!(result.parent(2), Some(3));
/// ```
#[instrument(
    name = "core.prim_mst_simple",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn prim_mst_simple(graph: &Graph, start: usize) -> Result<MstResult, MstError> {
    check_preconditions(graph, start)?;

    let vertex_count = graph.vertex_count();
    let mut result = MstResult::unreached(vertex_count);
    let mut states = vec![VertexState::Unvisited; vertex_count];

    result.set_key(start, 0);
    if let Some(state) = states.get_mut(start) {
        *state = VertexState::Frontier;
    }

    for _ in 0..vertex_count {
        let Some(current) = closest_frontier_vertex(&result, &states) else {
            return Err(MstError::NotConnected { vertex_count });
        };
        if let Some(state) = states.get_mut(current) {
            *state = VertexState::Fixed;
        }
        fix_vertex(&mut result, current, start);

        for (next, weight) in graph.neighbours(current) {
            let unfixed = states
                .get(next)
                .is_some_and(|state| *state != VertexState::Fixed);
            if unfixed && weight < result.key_or_infinite(next) {
                result.record(next, current, weight);
                if let Some(state) = states.get_mut(next) {
                    *state = VertexState::Frontier;
                }
                trace!(vertex = next, parent = current, key = weight, "relaxed vertex");
            }
        }
    }

    info!(total_weight = result.total_weight, "simple prim completed");
    Ok(result)
}

/// Returns the lowest-indexed frontier vertex holding the smallest key.
fn closest_frontier_vertex(result: &MstResult, states: &[VertexState]) -> Option<usize> {
    let mut best: Option<(usize, Weight)> = None;
    for (vertex, state) in states.iter().enumerate() {
        if *state != VertexState::Frontier {
            continue;
        }
        let key = result.key_or_infinite(vertex);
        if key < best.map_or(INFINITE_WEIGHT, |(_, best_key)| best_key) {
            best = Some((vertex, key));
        }
    }
    if let Some((vertex, key)) = best {
        trace!(vertex, key, "selected closest frontier vertex");
    }
    best.map(|(vertex, _)| vertex)
}


#[cfg(test)]
mod property;
