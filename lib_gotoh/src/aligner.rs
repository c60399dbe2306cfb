use std::time::Instant;

use log::debug;

use crate::{
    alignment_matrix::AlignmentMatrix, alignment_result::AlignmentResult, error::Result,
    gap_penalty::GapPenalty, scoring::ScoringModel, sequences::AlignmentSequences,
};

/// Computes an optimal global alignment of `reference` and `query` with affine gap penalties.
///
/// Returns [`Error::EmptySequence`](crate::error::Error::EmptySequence) if either sequence is empty.
/// Characters without a stored score in the scoring model are not an error, they score the default mismatch score.
pub fn align(
    reference: &[u8],
    query: &[u8],
    scoring: &ScoringModel,
    gap_penalty: GapPenalty,
) -> Result<AlignmentResult> {
    let matrix = compute_alignment_matrix(reference, query, scoring, gap_penalty)?;
    let result = matrix.traceback();
    debug!(
        "Alignment finished with score {} and CIGAR {}",
        result.score(),
        result.cigar()
    );
    Ok(result)
}

/// Computes the filled alignment matrices without tracing back an alignment.
pub fn compute_alignment_matrix<'reference, 'query>(
    reference: &'reference [u8],
    query: &'query [u8],
    scoring: &ScoringModel,
    gap_penalty: GapPenalty,
) -> Result<AlignmentMatrix<'reference, 'query>> {
    let sequences = AlignmentSequences::new(reference, query)?;
    debug!(
        "Aligning reference of length {} against query of length {} using scoring model '{}' and gap penalty {gap_penalty}",
        reference.len(),
        query.len(),
        scoring.name(),
    );

    let start_time = Instant::now();
    let matrix = AlignmentMatrix::new(sequences, scoring, gap_penalty);
    let end_time = Instant::now();
    let duration = (end_time - start_time).as_secs_f64();
    debug!("Filled the alignment matrices in {duration:.3}s");

    Ok(matrix)
}
