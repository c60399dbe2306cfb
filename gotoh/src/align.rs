use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow, ensure};
use clap::{Args, Parser};
use lib_gotoh::{
    align, aligner::compute_alignment_matrix, alignment_result::AlignmentResult,
    sequences::SequenceRole, verify_score,
};
use log::{LevelFilter, debug, info};
use serde::Serialize;

use crate::{
    align::fasta_parser::{FastaRecord, parse_pair_fasta_file, parse_single_fasta_file},
    config::ScoringArgs,
    initialise_logging,
};

mod fasta_parser;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    input: CliInput,

    #[command(flatten)]
    scoring: ScoringArgs,

    /// The file to store the alignment in toml format.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Log the match, insertion and deletion matrices with their backpointers.
    ///
    /// Meant for small inputs only.
    #[clap(long)]
    show_matrices: bool,
}

#[derive(Args)]
struct CliInput {
    #[clap(flatten)]
    separate_input: Option<CliSeparateInput>,

    #[clap(flatten)]
    pair_input: Option<CliPairInput>,

    #[clap(flatten)]
    literal_input: Option<CliLiteralInput>,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliSeparateInput {
    /// The path to the reference fasta file.
    #[clap(long, short = 'r', required = false, requires = "query")]
    reference: PathBuf,

    /// The path to the query fasta file.
    #[clap(long, short = 'q', required = false, requires = "reference")]
    query: PathBuf,
}

#[derive(Args)]
struct CliPairInput {
    /// The path to a fasta file containing both the reference and the query.
    #[clap(long, short = 'p', required = false, conflicts_with_all = ["reference", "query"])]
    pair_fasta: PathBuf,
}

#[derive(Args)]
#[group(multiple = true)]
struct CliLiteralInput {
    /// The reference sequence itself.
    #[clap(
        long,
        required = false,
        requires = "query_sequence",
        conflicts_with_all = ["reference", "query", "pair_fasta"]
    )]
    reference_sequence: String,

    /// The query sequence itself.
    #[clap(long, required = false, requires = "reference_sequence")]
    query_sequence: String,
}

/// The alignment as written to the toml output file.
#[derive(Debug, Serialize)]
struct AlignmentOutput {
    reference_id: String,
    query_id: String,
    score: i64,
    verified_score: i64,
    aligned_reference: String,
    aligned_query: String,
    cigar: String,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    // Load input sequences.
    let (reference_record, query_record) =
        if let Some(CliPairInput { pair_fasta }) = &cli.input.pair_input {
            info!("Loading pair file {pair_fasta:?}");
            parse_pair_fasta_file(pair_fasta)?
        } else if let Some(CliSeparateInput { reference, query }) = &cli.input.separate_input {
            info!("Loading reference file {reference:?}");
            let reference = parse_single_fasta_file(reference)?;

            info!("Loading query file {query:?}");
            let query = parse_single_fasta_file(query)?;

            (reference, query)
        } else if let Some(CliLiteralInput {
            reference_sequence,
            query_sequence,
        }) = &cli.input.literal_input
        {
            (
                literal_record("reference", reference_sequence),
                literal_record("query", query_sequence),
            )
        } else {
            return Err(anyhow!("No input sequences given"));
        };

    let setup = cli.scoring.resolve()?;
    debug!(
        "Using alphabet {} and gap penalty {}",
        setup.alphabet, setup.gap_penalty
    );

    // Convert sequences to upper case.
    let reference = reference_record.sequence.to_ascii_uppercase().into_bytes();
    let query = query_record.sequence.to_ascii_uppercase().into_bytes();
    setup.alphabet.validate(&reference, SequenceRole::Reference)?;
    setup.alphabet.validate(&query, SequenceRole::Query)?;

    let result = if cli.show_matrices {
        let matrix =
            compute_alignment_matrix(&reference, &query, &setup.scoring, setup.gap_penalty)?;
        info!("Alignment matrices:\n{matrix}");
        matrix.traceback()
    } else {
        align(&reference, &query, &setup.scoring, setup.gap_penalty)?
    };

    let verified_score = verify_score(
        result.aligned_reference(),
        result.aligned_query(),
        &setup.scoring,
        setup.gap_penalty,
    )?;

    print!("{result}");
    println!("CIGAR: {}", result.cigar());
    println!("Score: {}", result.score());
    println!("Verified score: {verified_score}");

    if let Some(output) = &cli.output {
        info!("Writing alignment to {output:?}");
        write_output(
            output,
            &reference_record,
            &query_record,
            &result,
            verified_score.as_i64(),
        )?;
    }

    ensure!(
        verified_score == result.score(),
        "Verified score {verified_score} differs from alignment score {}",
        result.score()
    );

    Ok(())
}

fn literal_record(id: &str, sequence: &str) -> FastaRecord {
    FastaRecord {
        id: id.to_string(),
        comment: String::new(),
        sequence: sequence.to_string(),
    }
}

fn write_output(
    path: &Path,
    reference_record: &FastaRecord,
    query_record: &FastaRecord,
    result: &AlignmentResult,
    verified_score: i64,
) -> Result<()> {
    let output = AlignmentOutput {
        reference_id: reference_record.name(),
        query_id: query_record.name(),
        score: result.score().as_i64(),
        verified_score,
        aligned_reference: result.aligned_reference_string(),
        aligned_query: result.aligned_query_string(),
        cigar: result.cigar(),
    };

    let mut file = std::io::BufWriter::new(
        File::create(path)
            .map_err(|error| anyhow!("Unable to create output file {path:?}: {error}"))?,
    );
    write!(file, "{}", toml::to_string(&output)?)?;
    file.flush()?;
    Ok(())
}
