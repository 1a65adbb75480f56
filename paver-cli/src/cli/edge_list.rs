//! Plain-text edge list ingestion.
//!
//! One `source destination weight` triple per line, separated by whitespace.
//! Blank lines are skipped and `#` starts a comment that runs to the end of
//! the line.

use std::io::{self, BufRead};

use paver_core::{Graph, GraphError};
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line did not hold a well-formed triple.
    #[error("line {line}: {reason}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },
    /// A triple parsed but was rejected by the graph.
    #[error("line {line}: {error}")]
    InvalidEdge {
        /// One-based line number.
        line: usize,
        /// Graph validation failure.
        #[source]
        error: GraphError,
    },
    /// The graph itself could not be created.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl EdgeListError {
    /// Returns the graph error behind this failure, if any.
    #[must_use]
    pub fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::InvalidEdge { error, .. } | Self::Graph(error) => Some(error),
            Self::Read { .. } | Self::Malformed { .. } => None,
        }
    }
}

struct Triple {
    line: usize,
    source: usize,
    destination: usize,
    weight: i64,
}

/// Reads an edge list into a [`Graph`].
///
/// When `vertices` is `None` the vertex count is one more than the largest
/// index mentioned.
///
/// # Errors
/// Returns [`EdgeListError`] when reading fails, a line is malformed, an edge
/// is rejected by the graph, or no vertex count can be derived.
///
/// # Examples
/// ```
/// use paver_cli::cli::read_edge_list;
///
/// let input = "# campus\n0 1 5\n1 2 3  # short hop\n\n";
/// let graph = read_edge_list(input.as_bytes(), None)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), paver_cli::cli::EdgeListError>(())
/// ```
pub fn read_edge_list(
    reader: impl BufRead,
    vertices: Option<usize>,
) -> Result<Graph, EdgeListError> {
    let mut triples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EdgeListError::Read { source })?;
        if let Some(triple) = parse_line(index + 1, &line)? {
            triples.push(triple);
        }
    }

    let vertex_count = match vertices {
        Some(count) => count,
        None => inferred_vertex_count(&triples)?,
    };

    let mut graph = Graph::new(vertex_count)?;
    for triple in triples {
        graph
            .add_edge(triple.source, triple.destination, triple.weight)
            .map_err(|error| EdgeListError::InvalidEdge {
                line: triple.line,
                error,
            })?;
    }
    Ok(graph)
}

fn inferred_vertex_count(triples: &[Triple]) -> Result<usize, EdgeListError> {
    triples.iter().try_fold(0, |count: usize, triple| {
        triple
            .source
            .max(triple.destination)
            .checked_add(1)
            .map(|needed| count.max(needed))
            .ok_or_else(|| EdgeListError::Malformed {
                line: triple.line,
                reason: "vertex index too large".to_owned(),
            })
    })
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Triple>, EdgeListError> {
    let content = raw.split('#').next().unwrap_or_default();
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, destination, weight] = fields.as_slice() else {
        if fields.is_empty() {
            return Ok(None);
        }
        return Err(EdgeListError::Malformed {
            line,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    };

    Ok(Some(Triple {
        line,
        source: parse_field(line, "source", source)?,
        destination: parse_field(line, "destination", destination)?,
        weight: parse_field(line, "weight", weight)?,
    }))
}

fn parse_field<T>(line: usize, name: &str, raw: &str) -> Result<T, EdgeListError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|error| EdgeListError::Malformed {
        line,
        reason: format!("invalid {name} `{raw}`: {error}"),
    })
}
