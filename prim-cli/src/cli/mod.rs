//! Command-line interface orchestration for the Prim demo.
//!
//! Offers the three catalogue graphs, a custom graph assembled from edge
//! arguments or an edge-list file, and a side-by-side comparison of the heap
//! and quadratic variants.

mod catalog;
mod commands;
mod render;

pub use catalog::ExampleGraph;
pub use commands::{
    AlgorithmArg, AlgorithmRun, Cli, CliError, Command, CompareArgs, CustomArgs, EdgeSpec,
    ExampleArgs, ExecutionSummary, MAX_VERTICES, run_cli,
};
pub use render::{render_graph, render_mst, render_summary};
