use std::fmt::Display;

use crate::{
    alignment_matrix::index::AlignmentMatrixIndex,
    error::{Error, Result},
};

/// The character used to mark gaps in aligned sequences.
pub const GAP_CHARACTER: u8 = b'-';

/// The two sequences of a pairwise alignment.
///
/// The reference is the first sequence and spans the rows of the alignment matrix,
/// the query is the second sequence and spans its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentSequences<'reference, 'query> {
    reference: &'reference [u8],
    query: &'query [u8],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceRole {
    Reference,
    Query,
}

impl<'reference, 'query> AlignmentSequences<'reference, 'query> {
    /// Returns [`Error::EmptySequence`] if either sequence is empty.
    pub fn new(reference: &'reference [u8], query: &'query [u8]) -> Result<Self> {
        if reference.is_empty() {
            Err(Error::EmptySequence(SequenceRole::Reference))
        } else if query.is_empty() {
            Err(Error::EmptySequence(SequenceRole::Query))
        } else {
            Ok(Self { reference, query })
        }
    }

    pub fn reference(&self) -> &'reference [u8] {
        self.reference
    }

    pub fn query(&self) -> &'query [u8] {
        self.query
    }

    /// The characters that are aligned against each other when entering the given matrix index diagonally.
    pub fn characters(&self, index: AlignmentMatrixIndex) -> (u8, u8) {
        (
            self.reference_character(index),
            self.query_character(index),
        )
    }

    /// The reference character consumed when entering the given matrix index from above.
    pub fn reference_character(&self, index: AlignmentMatrixIndex) -> u8 {
        self.reference[index.reference_index() - 1]
    }

    /// The query character consumed when entering the given matrix index from the left.
    pub fn query_character(&self, index: AlignmentMatrixIndex) -> u8 {
        self.query[index.query_index() - 1]
    }
}

impl Display for SequenceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceRole::Reference => write!(f, "reference"),
            SequenceRole::Query => write!(f, "query"),
        }
    }
}
