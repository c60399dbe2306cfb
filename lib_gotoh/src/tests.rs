use crate::{
    align,
    alignment_result::strip_gaps,
    error::Error,
    gap_penalty::GapPenalty,
    samples::SAMPLE_SEQUENCE_PAIRS,
    scoring::ScoringModel,
    sequences::SequenceRole,
    verify_score,
};

fn align_dna(reference: &[u8], query: &[u8]) -> (String, String, i64) {
    let result = align(
        reference,
        query,
        &ScoringModel::dna_default(),
        GapPenalty::new(-2, -1),
    )
    .unwrap();
    (
        result.aligned_reference_string(),
        result.aligned_query_string(),
        result.score().as_i64(),
    )
}

#[test]
fn identical_sequences() {
    assert_eq!(
        align_dna(b"ACGT", b"ACGT"),
        ("ACGT".into(), "ACGT".into(), 8)
    );
}

#[test]
fn single_substitution() {
    assert_eq!(
        align_dna(b"ACGT", b"ACGA"),
        ("ACGT".into(), "ACGA".into(), 5)
    );
}

#[test]
fn single_deletion() {
    assert_eq!(align_dna(b"ACGT", b"AGT"), ("ACGT".into(), "A-GT".into(), 4));
}

#[test]
fn single_insertion() {
    assert_eq!(align_dna(b"AGT", b"ACGT"), ("A-GT".into(), "ACGT".into(), 4));
}

#[test]
fn long_gap_is_preferred_over_several_short_gaps() {
    let (aligned_reference, aligned_query, score) = align_dna(b"AGCTAGCT", b"AGCT");
    assert_eq!(score, 3);
    assert_eq!(aligned_reference, "AGCTAGCT");
    assert_eq!(aligned_query, "----AGCT");
}

#[test]
fn sample_pairs() {
    let expected_scores = [4, 4, 12, 13, 3];
    let scoring = ScoringModel::dna_default();
    let gap_penalty = GapPenalty::default();

    for ((reference, query), expected_score) in SAMPLE_SEQUENCE_PAIRS.into_iter().zip(expected_scores)
    {
        let result = align(reference.as_bytes(), query.as_bytes(), &scoring, gap_penalty).unwrap();
        assert_eq!(result.score().as_i64(), expected_score, "{reference}/{query}");
        assert_eq!(
            verify_score(
                result.aligned_reference(),
                result.aligned_query(),
                &scoring,
                gap_penalty
            )
            .unwrap(),
            result.score(),
            "{reference}/{query}"
        );
        assert_eq!(strip_gaps(result.aligned_reference()), reference.as_bytes());
        assert_eq!(strip_gaps(result.aligned_query()), query.as_bytes());
    }
}

#[test]
fn empty_sequences_are_rejected() {
    let scoring = ScoringModel::dna_default();
    assert!(matches!(
        align(b"", b"ACGT", &scoring, GapPenalty::default()),
        Err(Error::EmptySequence(SequenceRole::Reference))
    ));
    assert!(matches!(
        align(b"ACGT", b"", &scoring, GapPenalty::default()),
        Err(Error::EmptySequence(SequenceRole::Query))
    ));
    assert!(matches!(
        align(b"", b"", &scoring, GapPenalty::default()),
        Err(Error::EmptySequence(_))
    ));
}

#[test]
fn unknown_characters_use_default_mismatch() {
    let result = align(
        b"NNN",
        b"NNN",
        &ScoringModel::dna_default(),
        GapPenalty::default(),
    )
    .unwrap();
    // Identical characters count as matches even though they score the default mismatch score.
    assert_eq!(result.score().as_i64(), -3);
    assert_eq!(result.cigar(), "3M");
}

#[test]
fn deterministic() {
    let scoring = ScoringModel::dna_default();
    let first = align(b"ACGTGTCAGT", b"ACGTCAGT", &scoring, GapPenalty::default()).unwrap();
    for _ in 0..10 {
        let next = align(b"ACGTGTCAGT", b"ACGTCAGT", &scoring, GapPenalty::default()).unwrap();
        assert_eq!(first, next);
    }
}

#[test]
fn presentation() {
    let result = align(
        b"ACGTA",
        b"AGTC",
        &ScoringModel::dna_default(),
        GapPenalty::default(),
    )
    .unwrap();
    assert_eq!(result.to_string(), "ACGTA\n| ||x\nA-GTC\n");
    assert_eq!(result.cigar(), "1M1D2M1X");
}
