use anyhow::{Result, ensure};
use clap::Parser;
use lib_gotoh::{align, samples::SAMPLE_SEQUENCE_PAIRS, verify_score};
use log::{LevelFilter, info, warn};

use crate::{config::ScoringArgs, initialise_logging};

/// Aligns the built-in sample sequence pairs and checks each score with the verifier.
#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    #[command(flatten)]
    scoring: ScoringArgs,
}

pub fn cli(cli: Cli) -> Result<()> {
    initialise_logging(cli.log_level);

    let setup = cli.scoring.resolve()?;
    let mut disagreements = 0;

    for (index, (reference, query)) in SAMPLE_SEQUENCE_PAIRS.iter().enumerate() {
        info!("Aligning sample pair {}", index + 1);
        let result = align(
            reference.as_bytes(),
            query.as_bytes(),
            &setup.scoring,
            setup.gap_penalty,
        )?;
        let verified_score = verify_score(
            result.aligned_reference(),
            result.aligned_query(),
            &setup.scoring,
            setup.gap_penalty,
        )?;

        println!("Sample {}: {reference} / {query}", index + 1);
        print!("{result}");
        println!("Score: {}", result.score());
        if verified_score == result.score() {
            println!("Verified score: {verified_score} (agrees)");
        } else {
            warn!(
                "Verified score {verified_score} differs from alignment score {} for sample {}",
                result.score(),
                index + 1
            );
            println!("Verified score: {verified_score} (DISAGREES)");
            disagreements += 1;
        }
        println!();
    }

    ensure!(
        disagreements == 0,
        "The verifier disagreed on {disagreements} sample pair(s)"
    );
    Ok(())
}
