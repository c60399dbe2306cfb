use std::collections::{BTreeMap, BTreeSet};

use crate::{alphabet::Alphabet, error::Result, score::Score};

pub mod io;

/// The score of any character pair that was not given a score explicitly.
pub const DEFAULT_MISMATCH_SCORE: Score = Score::from_i64(-1);

/// A symmetric substitution score lookup.
///
/// Every stored pair `(a, b)` has its mirror `(b, a)` stored with the same score.
/// Pairs without a stored score score [`DEFAULT_MISMATCH_SCORE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringModel {
    name: String,
    scores: BTreeMap<(u8, u8), Score>,
}

impl ScoringModel {
    /// Creates a scoring model from `(a, b, score)` triples.
    ///
    /// Each triple also sets the score of its mirrored pair.
    /// If the same unordered pair is given twice, the later triple wins for both orders.
    pub fn new(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (u8, u8, Score)>,
    ) -> Self {
        let mut scores = BTreeMap::new();
        for (a, b, score) in pairs {
            scores.insert((a, b), score);
            scores.insert((b, a), score);
        }

        Self {
            name: name.into(),
            scores,
        }
    }

    /// Scores identical characters of the alphabet with `match_score` and all other pairs of the alphabet with `mismatch_score`.
    pub fn new_match_mismatch(
        name: impl Into<String>,
        alphabet: &Alphabet,
        match_score: impl Into<Score>,
        mismatch_score: impl Into<Score>,
    ) -> Self {
        let match_score = match_score.into();
        let mismatch_score = mismatch_score.into();

        Self::new(
            name,
            alphabet.characters().iter().flat_map(|&a| {
                alphabet.characters().iter().map(move |&b| {
                    (a, b, if a == b { match_score } else { mismatch_score })
                })
            }),
        )
    }

    /// Match `+2`, mismatch `-1` over `ACGT`.
    pub fn dna_default() -> Self {
        Self::new_match_mismatch("DNA", &Alphabet::dna(), 2, -1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, a: u8, b: u8) -> Score {
        self.get(a, b).unwrap_or(DEFAULT_MISMATCH_SCORE)
    }

    /// The stored score of the pair, if any.
    pub fn get(&self, a: u8, b: u8) -> Option<Score> {
        self.scores.get(&(a, b)).copied()
    }

    pub fn contains_pair(&self, a: u8, b: u8) -> bool {
        self.scores.contains_key(&(a, b))
    }

    /// All characters that appear in a stored pair, in ascending order.
    pub fn characters(&self) -> Vec<u8> {
        self.scores
            .keys()
            .flat_map(|&(a, b)| [a, b])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The characters that appear in a stored pair as an alphabet.
    ///
    /// Fails if the model is empty or mentions a character that cannot be part of an alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(self.characters().into_iter().map(char::from))
    }

    /// Iterates over all stored ordered pairs, including the mirrored ones.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, Score)> + '_ {
        self.scores.iter().map(|(&(a, b), &score)| (a, b, score))
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
