//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{CampusArgs, CliError, FileArgs, OutputFormat, RunCommand, RunSource};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn campus_command(hubs: Vec<usize>, seed: u64) -> RunCommand {
    RunCommand {
        hubs,
        format: OutputFormat::Human,
        source: RunSource::Campus(CampusArgs {
            seed: Some(seed),
            min_weight: 1,
            max_weight: 10,
        }),
    }
}

pub(super) fn file_command(hubs: Vec<usize>, path: PathBuf) -> RunCommand {
    RunCommand {
        hubs,
        format: OutputFormat::Human,
        source: RunSource::File(FileArgs {
            path,
            vertices: None,
        }),
    }
}

pub(super) fn run_command_expecting_error(cmd: RunCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
