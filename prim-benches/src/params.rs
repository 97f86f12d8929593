//! Benchmark parameter types.

use std::fmt;

/// Parameters for a Prim benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct PrimBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Probability, in percent, that a vertex pair off the spanning path is
    /// joined by an edge.
    pub density_percent: u8,
}

impl fmt::Display for PrimBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}%", self.vertex_count, self.density_percent)
    }
}
