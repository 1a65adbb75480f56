//! Command-line interface orchestration for paver.
//!
//! The `run` command loads a graph from the built-in campus generator or an
//! edge-list file, computes the spanning tree and painted edges, and renders
//! the result as text or JSON.

mod commands;
mod edge_list;
mod render;

pub use commands::{
    CampusArgs, Cli, CliError, Command, ExecutionSummary, FileArgs, OutputFormat, RunCommand,
    RunSource, run_cli,
};
pub use edge_list::{EdgeListError, read_edge_list};
pub use render::render_summary;

#[cfg(test)]
mod test_helpers;
