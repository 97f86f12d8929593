//! Plain-text rendering of graphs, trees and command summaries.

use std::io::{self, Write};

use prim_core::{Graph, MstResult};

use super::commands::ExecutionSummary;

/// Writes the adjacency matrix of `graph`, printing `INF` for missing edges.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use prim_core::Graph;
/// # use prim_cli::cli::render_graph;
/// let graph = Graph::from_edges(2, &[(0, 1, 7)]).expect("edge is valid");
/// let mut buffer = Vec::new();
/// render_graph(&graph, &mut buffer).expect("writing to a Vec succeeds");
/// let text = String::from_utf8(buffer).expect("output is UTF-8");
/// assert!(text.contains("   0:   0   7"));
/// ```
pub fn render_graph(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    let vertex_count = graph.vertex_count();
    writeln!(writer, "Graph adjacency matrix ({vertex_count} vertices):")?;
    write!(writer, "     ")?;
    for column in 0..vertex_count {
        write!(writer, "{column:>4}")?;
    }
    writeln!(writer)?;

    for row in 0..vertex_count {
        write!(writer, "{row:>4}:")?;
        for column in 0..vertex_count {
            match graph.weight(row, column) {
                Some(weight) => write!(writer, "{weight:>4}")?,
                None => write!(writer, " INF")?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the tree edges of `result` followed by its total weight and edge
/// count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_mst(result: &MstResult, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Minimum spanning tree:")?;
    writeln!(writer, "Edge\t\tWeight")?;
    writeln!(writer, "----\t\t------")?;
    for edge in result.edges() {
        writeln!(
            writer,
            "{} -- {}\t\t{}",
            edge.parent(),
            edge.child(),
            edge.weight()
        )?;
    }
    writeln!(writer, "Total weight: {}", result.total_weight())?;
    writeln!(writer, "Number of edges: {}", result.edge_count())?;
    Ok(())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "=== {} ===", summary.title)?;
    if summary.show_graph {
        render_graph(&summary.graph, &mut writer)?;
    }

    if !summary.connected {
        writeln!(
            writer,
            "Warning: graph is not connected; no spanning tree exists."
        )?;
        return Ok(());
    }

    for run in &summary.runs {
        writeln!(writer)?;
        writeln!(
            writer,
            "Algorithm: {} (start vertex {})",
            run.algorithm, summary.start
        )?;
        render_mst(&run.result, &mut writer)?;
        if let Some(elapsed) = run.elapsed {
            writeln!(writer, "Execution time: {elapsed:?}")?;
        }
        let verdict = if run.valid { "passed" } else { "FAILED" };
        writeln!(writer, "Validation: {verdict}")?;
    }

    if let [first, second] = summary.runs.as_slice() {
        writeln!(writer)?;
        let (left, right) = (first.result.total_weight(), second.result.total_weight());
        if left == right {
            writeln!(writer, "Both algorithms agree on total weight {left}.")?;
        } else {
            writeln!(
                writer,
                "Total weights differ: {} gave {left}, {} gave {right}.",
                first.algorithm, second.algorithm
            )?;
        }
    }
    Ok(())
}
