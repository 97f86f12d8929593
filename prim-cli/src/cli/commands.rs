//! Command implementations and argument parsing for the `prim` CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use prim_core::{Algorithm, Graph, GraphError, MstError, MstResult, Weight, validate_mst};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::catalog::ExampleGraph;

/// Largest vertex count accepted by the `custom` command.
pub const MAX_VERTICES: u16 = 100;

const DEFAULT_COMPARE_EXAMPLE: u8 = 2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "prim", about = "Build minimum spanning trees with Prim's algorithm.")]
pub struct Cli {
    /// Prim variant used by `example` and `custom`.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Heap, global = true)]
    pub algorithm: AlgorithmArg,

    /// Vertex from which the tree is grown.
    #[arg(long, default_value_t = 0, global = true)]
    pub start: usize,

    /// Print the adjacency matrix before the tree.
    #[arg(long, global = true)]
    pub show_graph: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one of the built-in example graphs.
    Example(ExampleArgs),
    /// Run a graph assembled from edge arguments or an edge-list file.
    Custom(CustomArgs),
    /// Run both Prim variants on an example graph and compare them.
    Compare(CompareArgs),
}

/// Options accepted by the `example` command.
#[derive(Debug, Args, Clone)]
pub struct ExampleArgs {
    /// Example number (1: simple, 2: complete, 3: linear).
    #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
    pub number: u8,
}

/// Options accepted by the `custom` command.
#[derive(Debug, Args, Clone)]
pub struct CustomArgs {
    /// Number of vertices.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_VERTICES)))]
    pub vertices: u16,

    /// Edge given as `SRC,DEST,WEIGHT`; repeatable.
    #[arg(long = "edge", value_name = "SRC,DEST,WEIGHT")]
    pub edges: Vec<EdgeSpec>,

    /// File with one whitespace-separated `src dest weight` triple per line.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Options accepted by the `compare` command.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Example graph to compare on.
    #[arg(
        long,
        default_value_t = DEFAULT_COMPARE_EXAMPLE,
        value_parser = clap::value_parser!(u8).range(1..=3),
    )]
    pub example: u8,
}

/// Prim variant selectable on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    /// Binary-heap driven Prim.
    #[default]
    Heap,
    /// Quadratic Prim with a linear minimum scan.
    Simple,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Heap => Self::Heap,
            AlgorithmArg::Simple => Self::Simple,
        }
    }
}

/// A single `src, dest, weight` edge supplied by the user.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub src: usize,
    /// Second endpoint.
    pub dest: usize,
    /// Edge weight.
    pub weight: Weight,
}

impl EdgeSpec {
    fn from_fields<'a>(mut fields: impl Iterator<Item = &'a str>) -> Result<Self, String> {
        let (Some(src), Some(dest), Some(weight), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err("expected exactly three fields: src dest weight".to_owned());
        };
        Ok(Self {
            src: parse_field("source vertex", src)?,
            dest: parse_field("destination vertex", dest)?,
            weight: parse_field("weight", weight)?,
        })
    }
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::from_fields(raw.split(',').map(str::trim))
    }
}

fn parse_field<T: FromStr>(label: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {label} `{raw}`"))
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an edge-list file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of an edge-list file could not be parsed.
    #[error("{path}:{line}: {reason}")]
    MalformedEdge {
        /// File holding the line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Parse failure description.
        reason: String,
    },
    /// No catalogue graph carries the requested number.
    #[error("unknown example graph {number}; expected 1, 2 or 3")]
    UnknownExample {
        /// Requested example number.
        number: u8,
    },
    /// The vertex count lies outside `1..=MAX_VERTICES`.
    #[error("vertex count {vertices} must lie between 1 and {max}", max = MAX_VERTICES)]
    VertexCount {
        /// Requested vertex count.
        vertices: u16,
    },
    /// Graph construction rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Tree construction failed for a reason other than disconnection.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl CliError {
    /// Returns the stable core error code when the failure came from
    /// `prim-core`.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(error) => Some(error.code().as_str()),
            Self::Mst(error) => Some(error.code().as_str()),
            _ => None,
        }
    }
}

/// One Prim run and its verdict.
#[derive(Debug, Clone)]
pub struct AlgorithmRun {
    /// Variant that produced the tree.
    pub algorithm: Algorithm,
    /// The computed tree.
    pub result: MstResult,
    /// Whether the tree passed validation.
    pub valid: bool,
    /// Wall time spent in the algorithm, recorded by `compare`.
    pub elapsed: Option<Duration>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Heading describing the graph.
    pub title: String,
    /// The graph the command ran on.
    pub graph: Graph,
    /// Vertex the trees were grown from.
    pub start: usize,
    /// Whether to render the adjacency matrix.
    pub show_graph: bool,
    /// `false` when the graph has several components and no tree exists.
    pub connected: bool,
    /// Completed runs, empty when the graph is disconnected.
    pub runs: Vec<AlgorithmRun>,
}

/// Executes the CLI command represented by `cli`.
///
/// A disconnected graph is not an error: the summary reports it and carries
/// no runs.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built or read, or when the
/// start vertex is out of range.
///
/// # Examples
/// ```
/// use prim_cli::cli::{AlgorithmArg, Cli, Command, ExampleArgs, run_cli};
///
/// let cli = Cli {
///     algorithm: AlgorithmArg::Heap,
///     start: 0,
///     show_graph: false,
///     command: Command::Example(ExampleArgs { number: 1 }),
/// };
/// let summary = run_cli(cli).expect("example 1 runs");
/// assert_eq!(summary.runs[0].result.total_weight(), 19);
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty, algorithm = field::Empty, start = cli.start),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let algorithm = Algorithm::from(cli.algorithm);
    let options = cli.options();
    match cli.command {
        Command::Example(args) => {
            span.record("command", field::display("example"));
            span.record("algorithm", field::display(algorithm));
            let example = lookup_example(args.number)?;
            let graph = example.build()?;
            execute(example.title().to_owned(), graph, &[algorithm], &options)
        }
        Command::Custom(args) => {
            span.record("command", field::display("custom"));
            span.record("algorithm", field::display(algorithm));
            let graph = build_custom_graph(&args)?;
            let title = format!("Custom graph ({} vertices)", graph.vertex_count());
            execute(title, graph, &[algorithm], &options)
        }
        Command::Compare(args) => {
            span.record("command", field::display("compare"));
            let example = lookup_example(args.example)?;
            let graph = example.build()?;
            let title = format!("Algorithm comparison on {}", example.title());
            let timed = RunOptions {
                timed: true,
                ..options
            };
            execute(title, graph, &[Algorithm::Heap, Algorithm::Simple], &timed)
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct RunOptions {
    start: usize,
    show_graph: bool,
    timed: bool,
}

impl Cli {
    const fn options(&self) -> RunOptions {
        RunOptions {
            start: self.start,
            show_graph: self.show_graph,
            timed: false,
        }
    }
}

fn lookup_example(number: u8) -> Result<ExampleGraph, CliError> {
    ExampleGraph::from_number(number).ok_or(CliError::UnknownExample { number })
}

#[instrument(
    name = "cli.execute",
    err,
    skip(graph, algorithms, options),
    fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
)]
fn execute(
    title: String,
    graph: Graph,
    algorithms: &[Algorithm],
    options: &RunOptions,
) -> Result<ExecutionSummary, CliError> {
    let mut runs = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let began = Instant::now();
        let result = match algorithm.run(&graph, options.start) {
            Ok(result) => result,
            Err(MstError::NotConnected { vertex_count }) => {
                warn!(vertex_count, "graph is not connected, no spanning tree exists");
                return Ok(ExecutionSummary {
                    title,
                    graph,
                    start: options.start,
                    show_graph: options.show_graph,
                    connected: false,
                    runs: Vec::new(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        let elapsed = options.timed.then(|| began.elapsed());
        let valid = validate_mst(&graph, &result);
        info!(
            %algorithm,
            total_weight = result.total_weight(),
            valid,
            "spanning tree computed"
        );
        runs.push(AlgorithmRun {
            algorithm,
            result,
            valid,
            elapsed,
        });
    }

    Ok(ExecutionSummary {
        title,
        graph,
        start: options.start,
        show_graph: options.show_graph,
        connected: true,
        runs,
    })
}

/// Builds the graph for `custom`, inserting file edges before argument edges.
pub(super) fn build_custom_graph(args: &CustomArgs) -> Result<Graph, CliError> {
    if args.vertices == 0 || args.vertices > MAX_VERTICES {
        return Err(CliError::VertexCount {
            vertices: args.vertices,
        });
    }
    let mut graph = Graph::new(usize::from(args.vertices))?;
    if let Some(path) = &args.file {
        for edge in load_edge_file(path)? {
            graph.add_edge(edge.src, edge.dest, edge.weight)?;
        }
    }
    for edge in &args.edges {
        graph.add_edge(edge.src, edge.dest, edge.weight)?;
    }
    Ok(graph)
}

/// Reads an edge list, skipping blank lines and `#` comments.
#[instrument(name = "cli.load_edge_file", err, skip(path), fields(path = %path.display()))]
pub(super) fn load_edge_file(path: &Path) -> Result<Vec<EdgeSpec>, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut edges = Vec::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let edge = EdgeSpec::from_fields(line.split_whitespace()).map_err(|reason| {
            CliError::MalformedEdge {
                path: path.to_path_buf(),
                line: index + 1,
                reason,
            }
        })?;
        edges.push(edge);
    }
    info!(edges = edges.len(), "edge list loaded");
    Ok(edges)
}
