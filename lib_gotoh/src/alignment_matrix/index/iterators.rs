use crate::alignment_matrix::AlignmentState;

use super::AlignmentMatrixIndex;

/// An iterator over the boundary of the alignment matrix, skipping the origin.
///
/// Following deletions walks down column zero, following insertions walks along row zero.
pub struct AlignmentMatrixBoundaryIterator {
    index: AlignmentMatrixIndex,
    state: AlignmentState,
    limit: usize,
}

/// An iterator over the alignment matrix indices skipping row and column zero.
///
/// The iterator is reference-major, i.e. it walks a whole row of query positions before advancing to the next reference position.
/// Every index is therefore yielded after all of its predecessors.
pub struct AlignmentMatrixInnerIterator {
    index: AlignmentMatrixIndex,
    dimensions: AlignmentMatrixIndex,
}

impl AlignmentMatrixBoundaryIterator {
    /// Creates an iterator over the boundary entered via `state` in a matrix with the given dimensions.
    ///
    /// Only insertions and deletions can run along the boundary.
    pub(in crate::alignment_matrix) fn new(
        state: AlignmentState,
        dimensions: AlignmentMatrixIndex,
    ) -> Self {
        let (index, limit) = match state {
            AlignmentState::Deletion => {
                (AlignmentMatrixIndex::new(1, 0), dimensions.reference_index)
            }
            AlignmentState::Insertion => (AlignmentMatrixIndex::new(0, 1), dimensions.query_index),
            AlignmentState::Match => panic!("Matches never run along the matrix boundary"),
        };

        Self {
            index,
            state,
            limit,
        }
    }
}

impl AlignmentMatrixInnerIterator {
    pub(in crate::alignment_matrix) fn new(dimensions: AlignmentMatrixIndex) -> Self {
        debug_assert!(dimensions.reference_index > 0);
        debug_assert!(dimensions.query_index > 0);

        Self {
            index: AlignmentMatrixIndex::new(1, 1),
            dimensions,
        }
    }
}

impl Iterator for AlignmentMatrixBoundaryIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let position = match self.state {
            AlignmentState::Deletion => &mut self.index.reference_index,
            _ => &mut self.index.query_index,
        };

        if *position < self.limit {
            *position += 1;
            Some(match self.state {
                AlignmentState::Deletion => self.index.deletion_predecessor(),
                _ => self.index.insertion_predecessor(),
            })
        } else {
            None
        }
    }
}

impl Iterator for AlignmentMatrixInnerIterator {
    type Item = AlignmentMatrixIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index.query_index >= self.dimensions.query_index {
            self.index.query_index = 1;
            self.index.reference_index += 1;
        }

        if self.index.reference_index < self.dimensions.reference_index
            && self.index.query_index < self.dimensions.query_index
        {
            let result = self.index;
            self.index.query_index += 1;
            Some(result)
        } else {
            None
        }
    }
}
