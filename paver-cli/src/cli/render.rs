//! Report rendering for [`ExecutionSummary`].

use std::io::{self, Write};

use paver_core::{MarkedEdge, TotalWeight, Weight};
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat};

#[derive(Debug, Serialize)]
struct Report<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    vertices: usize,
    components: usize,
    hubs: &'a [usize],
    spanning_tree: Vec<EdgeRecord>,
    spanning_weight: TotalWeight,
    adjacency_matrix: Vec<Vec<Weight>>,
    painted_edges: Vec<EdgeRecord>,
    painted_weight: TotalWeight,
}

#[derive(Debug, Serialize)]
struct EdgeRecord {
    source: usize,
    destination: usize,
    weight: Weight,
    painted: bool,
}

impl From<MarkedEdge> for EdgeRecord {
    fn from(edge: MarkedEdge) -> Self {
        Self {
            source: edge.source(),
            destination: edge.destination(),
            weight: edge.weight(),
            painted: edge.is_used(),
        }
    }
}

impl<'a> Report<'a> {
    fn new(summary: &'a ExecutionSummary) -> Self {
        let plan = &summary.plan;
        let forest = plan.forest();
        let spanning_tree: Vec<EdgeRecord> =
            plan.usage().marked_edges().map(EdgeRecord::from).collect();
        let painted_edges = plan
            .usage()
            .marked_edges()
            .filter(MarkedEdge::is_used)
            .map(EdgeRecord::from)
            .collect();
        Self {
            source: &summary.source,
            seed: summary.seed,
            vertices: forest.vertex_count(),
            components: forest.component_count(),
            hubs: plan.hubs(),
            spanning_tree,
            spanning_weight: forest.total_weight(),
            adjacency_matrix: forest.adjacency_matrix(),
            painted_edges,
            painted_weight: plan.painted_weight(),
        }
    }
}

/// Renders `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use paver_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use paver_core::{Graph, PaverBuilder};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_triples(3, [(0, 1, 2), (1, 2, 5), (0, 2, 9)])?;
/// let plan = PaverBuilder::new().with_hubs([0, 2]).build()?.run(&graph)?;
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     seed: None,
///     format: OutputFormat::Human,
///     plan,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("0 - 1 : 2"));
/// assert!(text.ends_with("painted weight: 7\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = Report::new(summary);
    match summary.format {
        OutputFormat::Human => render_human(&report, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)
        }
    }
}

fn render_human(report: &Report<'_>, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", report.source)?;
    writeln!(writer, "vertices: {}", report.vertices)?;
    if report.components > 1 {
        writeln!(writer, "components: {}", report.components)?;
    }

    writeln!(writer, "minimum spanning tree:")?;
    for edge in &report.spanning_tree {
        writeln!(writer, "{} - {} : {}", edge.source, edge.destination, edge.weight)?;
    }
    writeln!(writer, "spanning weight: {}", report.spanning_weight)?;

    writeln!(writer, "adjacency matrix:")?;
    let width = report
        .adjacency_matrix
        .iter()
        .flatten()
        .map(|cell| cell.to_string().len())
        .max()
        .unwrap_or(1);
    for row in &report.adjacency_matrix {
        let cells: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }

    let hubs: Vec<String> = report.hubs.iter().map(ToString::to_string).collect();
    writeln!(writer, "painted edges (hubs {}):", hubs.join(", "))?;
    for edge in &report.painted_edges {
        writeln!(
            writer,
            "{} - {}, weight: {}",
            edge.source, edge.destination, edge.weight
        )?;
    }
    writeln!(writer, "painted weight: {}", report.painted_weight)
}
