use std::ops::{Index, IndexMut};

use ndarray::Array2;

use super::AlignmentState;

pub mod iterators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixIndex {
    pub(in crate::alignment_matrix) reference_index: usize,
    pub(in crate::alignment_matrix) query_index: usize,
}

impl AlignmentMatrixIndex {
    pub fn new(reference_index: usize, query_index: usize) -> Self {
        Self {
            reference_index,
            query_index,
        }
    }

    pub fn reference_index(&self) -> usize {
        self.reference_index
    }

    pub fn query_index(&self) -> usize {
        self.query_index
    }

    pub fn is_origin(&self) -> bool {
        self.reference_index == 0 && self.query_index == 0
    }

    pub fn insertion_predecessor(&self) -> Self {
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index,
            query_index: self.query_index - 1,
        }
    }

    pub fn deletion_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index,
        }
    }

    pub fn match_predecessor(&self) -> Self {
        debug_assert!(self.reference_index > 0);
        debug_assert!(self.query_index > 0);

        Self {
            reference_index: self.reference_index - 1,
            query_index: self.query_index - 1,
        }
    }

    /// The index that is left when leaving this index backwards through the given state.
    pub fn predecessor(&self, state: AlignmentState) -> Self {
        match state {
            AlignmentState::Match => self.match_predecessor(),
            AlignmentState::Insertion => self.insertion_predecessor(),
            AlignmentState::Deletion => self.deletion_predecessor(),
        }
    }

    /// Returns true if the given state can be left backwards from this index without leaving the matrix.
    pub fn has_predecessor(&self, state: AlignmentState) -> bool {
        match state {
            AlignmentState::Match => self.reference_index > 0 && self.query_index > 0,
            AlignmentState::Insertion => self.query_index > 0,
            AlignmentState::Deletion => self.reference_index > 0,
        }
    }
}

impl<T> Index<AlignmentMatrixIndex> for Array2<T> {
    type Output = <Array2<T> as Index<[usize; 2]>>::Output;

    fn index(&self, index: AlignmentMatrixIndex) -> &Self::Output {
        &self[[index.reference_index, index.query_index]]
    }
}

impl<T> IndexMut<AlignmentMatrixIndex> for Array2<T> {
    fn index_mut(&mut self, index: AlignmentMatrixIndex) -> &mut Self::Output {
        &mut self[[index.reference_index, index.query_index]]
    }
}

impl std::fmt::Display for AlignmentMatrixIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.reference_index, self.query_index)
    }
}
