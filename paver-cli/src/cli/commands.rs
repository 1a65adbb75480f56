//! Command implementations and argument parsing for the paver CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use paver_core::{
    CAMPUS_HUBS, GeneratorConfig, Graph, Paver, PaverBuilder, PaverError, PavingPlan, Weight,
    campus_graph,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, read_edge_list};

const DEFAULT_MIN_WEIGHT: Weight = 1;
const DEFAULT_MAX_WEIGHT: Weight = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "paver",
    about = "Build a minimum spanning tree and paint the edges joining hub sites."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the spanning tree and painted edges for a graph.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Hub vertex; repeat for several hubs. Defaults to 2, 3 and 5 for the
    /// campus graph.
    #[arg(long = "hub", value_name = "VERTEX")]
    pub hubs: Vec<usize>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Graph source.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph sources supported by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Generate the six-site campus graph with random weights.
    Campus(CampusArgs),
    /// Read a `source destination weight` edge list, one edge per line.
    File(FileArgs),
}

/// Campus generation arguments.
#[derive(Debug, Args, Clone)]
pub struct CampusArgs {
    /// Seed for the weight generator; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest generated weight.
    #[arg(long = "min-weight", default_value_t = DEFAULT_MIN_WEIGHT)]
    pub min_weight: Weight,

    /// Largest generated weight.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: Weight,
}

/// Edge list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge list.
    pub path: PathBuf,

    /// Vertex count; defaults to the largest index plus one.
    #[arg(long)]
    pub vertices: Option<usize>,
}

/// Report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text listing.
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error("failed to load `{path}`: {error}")]
    EdgeList {
        /// Path of the edge list.
        path: PathBuf,
        /// Parse or validation failure.
        #[source]
        error: EdgeListError,
    },
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] PaverError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Human-readable description of the graph source.
    pub source: String,
    /// Generator seed, when the graph was generated.
    pub seed: Option<u64>,
    /// Requested output format.
    pub format: OutputFormat,
    /// Spanning tree and usage computed by the core.
    pub plan: PavingPlan,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or running the pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use paver_cli::cli::{CampusArgs, Cli, Command, OutputFormat, RunCommand, RunSource, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         hubs: Vec::new(),
///         format: OutputFormat::Human,
///         source: RunSource::Campus(CampusArgs {
///             seed: Some(7),
///             min_weight: 1,
///             max_weight: 10,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.plan.hubs(), &[2, 3, 5]);
/// assert_eq!(summary.plan.forest().edges().len(), 5);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(source = field::Empty, hubs = field::Empty, format = ?command.format),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        hubs,
        format,
        source,
    } = command;
    let span = Span::current();

    let (label, seed, graph, hubs) = match source {
        RunSource::Campus(args) => {
            span.record("source", field::display("campus"));
            let hubs = if hubs.is_empty() {
                CAMPUS_HUBS.to_vec()
            } else {
                hubs
            };
            let (seed, graph) = generate_campus(&args)?;
            (format!("campus (seed {seed})"), Some(seed), graph, hubs)
        }
        RunSource::File(args) => {
            span.record("source", field::display("file"));
            let graph = load_edge_list(&args.path, args.vertices)?;
            (args.path.display().to_string(), None, graph, hubs)
        }
    };
    span.record("hubs", field::debug(&hubs));

    let paver: Paver = PaverBuilder::new().with_hubs(hubs).build()?;
    let plan = paver.run(&graph)?;

    info!(
        source = label.as_str(),
        painted_weight = plan.painted_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source: label,
        seed,
        format,
        plan,
    })
}

#[instrument(
    name = "cli.generate_campus",
    err,
    skip(args),
    fields(seed = field::Empty, min_weight = args.min_weight, max_weight = args.max_weight),
)]
pub(super) fn generate_campus(args: &CampusArgs) -> Result<(u64, Graph), CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    let config = GeneratorConfig {
        min_weight: args.min_weight,
        max_weight: args.max_weight,
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = campus_graph(&config, &mut rng)?;
    Ok((seed, graph))
}

#[instrument(
    name = "cli.load_edge_list",
    err,
    skip(path),
    fields(path = %path.display()),
)]
pub(super) fn load_edge_list(path: &Path, vertices: Option<usize>) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_edge_list(BufReader::new(file), vertices).map_err(|error| {
        CliError::EdgeList {
            path: path.to_path_buf(),
            error,
        }
    })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "edge list loaded"
    );
    Ok(graph)
}
