//! The command line front end of the aligner.

use log::{LevelFilter, debug};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod config;
pub mod samples;

/// Initialises terminal logging.
///
/// Only the first initialisation in a process takes effect.
fn initialise_logging(log_level: LevelFilter) {
    if TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        debug!("Logger was already initialised");
    }
}
