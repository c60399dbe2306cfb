//! Canned sequence pairs for demonstrating and checking the aligner.

/// Pairs of reference and query sequences over the DNA alphabet.
pub const SAMPLE_SEQUENCE_PAIRS: [(&str, &str); 5] = [
    ("ACGT", "AGT"),
    ("AGTC", "AGC"),
    ("ACGTACGT", "ACGACGT"),
    ("ACGTGTCAGT", "ACGTCAGT"),
    ("AGCTAGCT", "AGCT"),
];
