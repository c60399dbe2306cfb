use clap::{Parser, Subcommand};
use gotoh::{align, samples};

#[derive(Parser)]
#[command(version, about)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align a reference and a query sequence.
    Align(align::Cli),

    /// Align the built-in sample sequence pairs and verify their scores.
    Samples(samples::Cli),
}

fn main() -> anyhow::Result<()> {
    match CommandLine::parse().command {
        Command::Align(cli) => align::cli(cli),
        Command::Samples(cli) => samples::cli(cli),
    }
}
