use log::trace;

use crate::{
    error::{Error, Result},
    gap_penalty::GapPenalty,
    score::Score,
    scoring::ScoringModel,
    sequences::GAP_CHARACTER,
};

/// Recomputes the score of an alignment from its two aligned sequences alone.
///
/// A gap column opens a gap if the previous column was not a gap in the same sequence, and extends it otherwise.
/// A column with gaps in both sequences is scored as a gap in the reference.
/// Columns without gaps are scored by the scoring model.
///
/// Returns [`Error::AlignedLengthMismatch`] if the aligned sequences differ in length.
pub fn verify_score(
    aligned_reference: &[u8],
    aligned_query: &[u8],
    scoring: &ScoringModel,
    gap_penalty: GapPenalty,
) -> Result<Score> {
    if aligned_reference.len() != aligned_query.len() {
        return Err(Error::AlignedLengthMismatch {
            reference_length: aligned_reference.len(),
            query_length: aligned_query.len(),
        });
    }

    let mut score = Score::ZERO;
    let mut reference_gap_length = 0usize;
    let mut query_gap_length = 0usize;

    for (&reference_character, &query_character) in aligned_reference.iter().zip(aligned_query) {
        if reference_character == GAP_CHARACTER {
            score += gap_penalty.score(reference_gap_length == 0);
            reference_gap_length += 1;
            query_gap_length = 0;
        } else if query_character == GAP_CHARACTER {
            score += gap_penalty.score(query_gap_length == 0);
            query_gap_length += 1;
            reference_gap_length = 0;
        } else {
            score += scoring.score(reference_character, query_character);
            reference_gap_length = 0;
            query_gap_length = 0;
        }
    }

    trace!(
        "Verified score {score} for an alignment with {} columns",
        aligned_reference.len()
    );
    Ok(score)
}
