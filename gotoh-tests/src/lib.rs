//! Helpers for driving the `gotoh` command line from tests.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use gotoh::{align, samples};

/// The absolute path of a file in the `test_files` directory of the repository.
pub fn test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.push("test_files");
    path.push(name);
    path.to_string_lossy().into_owned()
}

/// Runs a `gotoh` subcommand, with the subcommand name as first argument.
pub fn run<'argument>(args: impl IntoIterator<Item = &'argument str>) -> Result<()> {
    let args: Vec<_> = args.into_iter().collect();

    match args.first() {
        Some(&"align") => align::cli(align::Cli::parse_from(args)),
        Some(&"samples") => samples::cli(samples::Cli::parse_from(args)),
        Some(command) => Err(anyhow!("Unknown subcommand {command}")),
        None => Err(anyhow!("No subcommand given")),
    }
}
