//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use prim_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction rejected a generated edge.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Edge density must be a percentage.
    #[error("edge density {density_percent}% must lie between 0 and 100")]
    InvalidDensity {
        /// Requested density.
        density_percent: u8,
    },
    /// The generated weight range is empty or exceeds the graph limit.
    #[error("maximum weight {max_weight} must lie between 1 and {limit}")]
    InvalidMaxWeight {
        /// Requested maximum weight.
        max_weight: prim_core::Weight,
        /// Largest weight a graph accepts.
        limit: prim_core::Weight,
    },
}
