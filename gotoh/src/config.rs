use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use clap::Args;
use lib_gotoh::{alphabet::Alphabet, gap_penalty::GapPenalty, scoring::ScoringModel};
use log::{debug, info};
use serde::Deserialize;

/// The scoring configuration as read from a toml file.
///
/// Relative paths are interpreted relative to the directory of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GotohConfig {
    pub alphabet: Option<String>,
    pub match_score: i64,
    pub mismatch_score: i64,
    pub gap_open: i64,
    pub gap_extend: i64,
    pub scoring_table: Option<PathBuf>,
    pub scoring_pairs: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoringArgs {
    /// A toml file with the scoring configuration.
    ///
    /// Values given on the command line take precedence over values in this file.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// The characters the input sequences may consist of, e.g. `ACGT`.
    ///
    /// Defaults to the characters of the scoring table or scoring pairs if those are given, and to `ACGT` otherwise.
    #[clap(long, short = 'a')]
    alphabet: Option<String>,

    /// The score of aligning two identical characters, if no scoring table or pairs are given.
    #[clap(long, allow_negative_numbers = true)]
    match_score: Option<i64>,

    /// The score of aligning two different characters, if no scoring table or pairs are given.
    #[clap(long, allow_negative_numbers = true)]
    mismatch_score: Option<i64>,

    /// The score of the first character of a gap.
    #[clap(long, allow_negative_numbers = true)]
    gap_open: Option<i64>,

    /// The score of each further character of a gap.
    #[clap(long, allow_negative_numbers = true)]
    gap_extend: Option<i64>,

    /// A plain-text substitution score table.
    #[clap(long, conflicts_with = "scoring_pairs")]
    scoring_table: Option<PathBuf>,

    /// A file with one `A C <score>` triple per line.
    #[clap(long)]
    scoring_pairs: Option<PathBuf>,
}

/// Everything needed to align and verify sequences.
pub struct ScoringSetup {
    pub alphabet: Alphabet,
    pub scoring: ScoringModel,
    pub gap_penalty: GapPenalty,
}

impl Default for GotohConfig {
    fn default() -> Self {
        Self {
            alphabet: None,
            match_score: 2,
            mismatch_score: -1,
            gap_open: -2,
            gap_extend: -1,
            scoring_table: None,
            scoring_pairs: None,
        }
    }
}

impl GotohConfig {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration file {path:?}");

        let mut config = String::new();
        BufReader::new(
            File::open(path)
                .map_err(|error| anyhow!("Unable to open config file {path:?}: {error}"))?,
        )
        .read_to_string(&mut config)?;
        let mut config: Self = toml::from_str(&config)
            .map_err(|error| anyhow!("Unable to parse config file {path:?}: {error}"))?;

        let directory = path.parent().unwrap_or(Path::new(""));
        for file in [&mut config.scoring_table, &mut config.scoring_pairs]
            .into_iter()
            .flatten()
        {
            if file.is_relative() {
                *file = directory.join(&*file);
            }
        }

        Ok(config)
    }
}

impl ScoringArgs {
    /// Combines the configuration file with the command line values.
    ///
    /// A scoring table or scoring pairs given on the command line replace both of them from the configuration file.
    pub fn resolve(&self) -> Result<ScoringSetup> {
        let mut config = match &self.config {
            Some(path) => GotohConfig::read(path)?,
            None => GotohConfig::default(),
        };

        if self.alphabet.is_some() {
            config.alphabet.clone_from(&self.alphabet);
        }
        if self.scoring_table.is_some() || self.scoring_pairs.is_some() {
            config.scoring_table.clone_from(&self.scoring_table);
            config.scoring_pairs.clone_from(&self.scoring_pairs);
        }
        config.match_score = self.match_score.unwrap_or(config.match_score);
        config.mismatch_score = self.mismatch_score.unwrap_or(config.mismatch_score);
        config.gap_open = self.gap_open.unwrap_or(config.gap_open);
        config.gap_extend = self.gap_extend.unwrap_or(config.gap_extend);
        debug!("Resolved configuration: {config:?}");

        config.into_setup()
    }
}

impl GotohConfig {
    fn into_setup(self) -> Result<ScoringSetup> {
        let alphabet = self
            .alphabet
            .as_deref()
            .map(|alphabet| {
                alphabet
                    .parse::<Alphabet>()
                    .map_err(|error| anyhow!("Invalid alphabet '{alphabet}': {error}"))
            })
            .transpose()?;

        let scoring = if let Some(scoring_table) = &self.scoring_table {
            info!("Loading scoring table {scoring_table:?}");
            ScoringModel::read_plain(File::open(scoring_table).map_err(|error| {
                anyhow!("Unable to open scoring table {scoring_table:?}: {error}")
            })?)?
        } else if let Some(scoring_pairs) = &self.scoring_pairs {
            info!("Loading scoring pairs {scoring_pairs:?}");
            let name = scoring_pairs
                .file_stem()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            ScoringModel::read_pairs(
                name,
                File::open(scoring_pairs).map_err(|error| {
                    anyhow!("Unable to open scoring pairs {scoring_pairs:?}: {error}")
                })?,
            )?
        } else {
            let alphabet = alphabet.clone().unwrap_or_else(Alphabet::dna);
            ScoringModel::new_match_mismatch(
                format!("match {} mismatch {}", self.match_score, self.mismatch_score),
                &alphabet,
                self.match_score,
                self.mismatch_score,
            )
        };

        let alphabet = match alphabet {
            Some(alphabet) => alphabet,
            None => scoring.alphabet().map_err(|error| {
                anyhow!(
                    "Unable to derive an alphabet from scoring model '{}': {error}",
                    scoring.name()
                )
            })?,
        };

        Ok(ScoringSetup {
            alphabet,
            scoring,
            gap_penalty: GapPenalty::new(self.gap_open, self.gap_extend),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::GotohConfig;

    #[test]
    fn defaults() {
        let setup = GotohConfig::default().into_setup().unwrap();
        assert_eq!(setup.alphabet.to_string(), "ACGT");
        assert_eq!(setup.scoring.score(b'A', b'A').as_i64(), 2);
        assert_eq!(setup.scoring.score(b'A', b'C').as_i64(), -1);
        assert_eq!(setup.gap_penalty.open.as_i64(), -2);
        assert_eq!(setup.gap_penalty.extend.as_i64(), -1);
    }

    #[test]
    fn partial_toml() {
        let config: GotohConfig = toml::from_str("alphabet = \"ACGTN\"\ngap_open = -5\n").unwrap();
        assert_eq!(config.alphabet.as_deref(), Some("ACGTN"));
        assert_eq!(config.gap_open, -5);
        assert_eq!(config.gap_extend, -1);
        assert_eq!(config.match_score, 2);

        let setup = config.into_setup().unwrap();
        assert_eq!(setup.scoring.score(b'N', b'N').as_i64(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<GotohConfig>("gap_close = 3\n").is_err());
    }

    #[test]
    fn invalid_alphabet() {
        let config = GotohConfig {
            alphabet: Some("AA".into()),
            ..Default::default()
        };
        assert!(config.into_setup().is_err());
    }
}
