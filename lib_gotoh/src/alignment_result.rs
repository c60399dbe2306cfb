use std::fmt::Display;

use alignment::{Alignment, AlignmentType};

use crate::{score::Score, sequences::GAP_CHARACTER};

pub mod alignment;

/// An optimal global alignment of a reference against a query.
///
/// Both aligned sequences have the same length and use [`GAP_CHARACTER`] for gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentResult {
    aligned_reference: Vec<u8>,
    aligned_query: Vec<u8>,
    alignment: Alignment,
    score: Score,
}

impl AlignmentResult {
    pub(crate) fn new(
        aligned_reference: Vec<u8>,
        aligned_query: Vec<u8>,
        alignment: Alignment,
        score: Score,
    ) -> Self {
        debug_assert_eq!(aligned_reference.len(), aligned_query.len());
        debug_assert_eq!(aligned_reference.len(), alignment.len());

        Self {
            aligned_reference,
            aligned_query,
            alignment,
            score,
        }
    }

    pub fn aligned_reference(&self) -> &[u8] {
        &self.aligned_reference
    }

    pub fn aligned_query(&self) -> &[u8] {
        &self.aligned_query
    }

    pub fn aligned_reference_string(&self) -> String {
        String::from_utf8_lossy(&self.aligned_reference).into_owned()
    }

    pub fn aligned_query_string(&self) -> String {
        String::from_utf8_lossy(&self.aligned_query).into_owned()
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn cigar(&self) -> String {
        self.alignment.cigar()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_reference.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_reference.is_empty()
    }

    /// A line marking each column with `|` for identical characters, ` ` for gaps and `x` for substitutions.
    pub fn match_line(&self) -> String {
        self.alignment
            .iter_flat()
            .map(|alignment_type| match alignment_type {
                AlignmentType::Match => '|',
                AlignmentType::Substitution => 'x',
                AlignmentType::Insertion | AlignmentType::Deletion => ' ',
            })
            .collect()
    }
}

impl Display for AlignmentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.aligned_reference_string())?;
        writeln!(f, "{}", self.match_line())?;
        writeln!(f, "{}", self.aligned_query_string())
    }
}

/// Removes all gap characters from an aligned sequence.
pub fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned
        .iter()
        .copied()
        .filter(|&character| character != GAP_CHARACTER)
        .collect()
}
