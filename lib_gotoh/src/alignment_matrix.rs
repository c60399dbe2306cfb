use index::{
    AlignmentMatrixIndex,
    iterators::{AlignmentMatrixBoundaryIterator, AlignmentMatrixInnerIterator},
};
use log::trace;
use ndarray::Array2;
use num_traits::{Bounded, Zero};

use crate::{
    gap_penalty::GapPenalty,
    score::{ExtendedScore, Score},
    scoring::ScoringModel,
    sequences::AlignmentSequences,
};

pub mod display;
pub mod index;
mod traceback;

/// The three score matrices of an affine gap alignment, each with per-entry backpointers.
///
/// Row `i` and column `j` stand for the prefixes of length `i` of the reference and of length `j` of the query.
/// The matrices are filled completely on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix<'reference, 'query> {
    sequences: AlignmentSequences<'reference, 'query>,
    match_matrix: Array2<AlignmentMatrixEntry>,
    insertion_matrix: Array2<AlignmentMatrixEntry>,
    deletion_matrix: Array2<AlignmentMatrixEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub score: ExtendedScore,
    /// The state this entry was entered from, or `None` for the matrix origin and for entries that were never computed.
    pub predecessor: Option<AlignmentState>,
}

/// The state an alignment is in after aligning a prefix pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentState {
    /// The last column aligns a reference character to a query character.
    Match,
    /// The last column aligns a query character to a gap.
    Insertion,
    /// The last column aligns a reference character to a gap.
    Deletion,
}

impl AlignmentState {
    /// The order in which states are preferred when their scores tie.
    pub const PREFERENCE_ORDER: [Self; 3] = [Self::Match, Self::Insertion, Self::Deletion];

    pub fn letter(&self) -> char {
        match self {
            AlignmentState::Match => 'M',
            AlignmentState::Insertion => 'I',
            AlignmentState::Deletion => 'D',
        }
    }
}

impl<'reference, 'query> AlignmentMatrix<'reference, 'query> {
    pub fn new(
        sequences: AlignmentSequences<'reference, 'query>,
        scoring: &ScoringModel,
        gap_penalty: GapPenalty,
    ) -> Self {
        let dimensions = (sequences.reference().len() + 1, sequences.query().len() + 1);
        let mut result = Self {
            sequences,
            match_matrix: Array2::default(dimensions),
            insertion_matrix: Array2::default(dimensions),
            deletion_matrix: Array2::default(dimensions),
        };

        result.initialise(gap_penalty);
        result.align_inner(scoring, gap_penalty);
        result
    }

    pub fn sequences(&self) -> &AlignmentSequences<'reference, 'query> {
        &self.sequences
    }

    /// The number of rows and columns of each matrix.
    pub fn dimensions(&self) -> AlignmentMatrixIndex {
        let (rows, columns) = self.match_matrix.dim();
        AlignmentMatrixIndex::new(rows, columns)
    }

    /// The index of the last row and column, where every global alignment ends.
    pub fn end_index(&self) -> AlignmentMatrixIndex {
        let dimensions = self.dimensions();
        AlignmentMatrixIndex::new(dimensions.reference_index - 1, dimensions.query_index - 1)
    }

    pub fn state_matrix(&self, state: AlignmentState) -> &Array2<AlignmentMatrixEntry> {
        match state {
            AlignmentState::Match => &self.match_matrix,
            AlignmentState::Insertion => &self.insertion_matrix,
            AlignmentState::Deletion => &self.deletion_matrix,
        }
    }

    pub fn entry(&self, state: AlignmentState, index: AlignmentMatrixIndex) -> AlignmentMatrixEntry {
        self.state_matrix(state)[index]
    }

    /// The best state at the end of the matrices, preferring states in [`AlignmentState::PREFERENCE_ORDER`] on ties.
    pub fn best_end_state(&self) -> (AlignmentState, ExtendedScore) {
        self.best_state_at(self.end_index())
    }

    fn best_state_at(&self, index: AlignmentMatrixIndex) -> (AlignmentState, ExtendedScore) {
        let mut best_state = AlignmentState::PREFERENCE_ORDER[0];
        let mut best_score = self.entry(best_state, index).score;

        for state in AlignmentState::PREFERENCE_ORDER.into_iter().skip(1) {
            let score = self.entry(state, index).score;
            if score > best_score {
                best_state = state;
                best_score = score;
            }
        }

        (best_state, best_score)
    }

    fn initialise(&mut self, gap_penalty: GapPenalty) {
        // Initialise matrix origin.
        self.match_matrix[[0, 0]] = AlignmentMatrixEntry {
            score: Score::zero().into(),
            predecessor: None,
        };

        // Initialise matrix edges with leading gaps.
        let dimensions = self.dimensions();
        trace!("Initialising alignment matrix edges for dimensions {dimensions}");
        for index in AlignmentMatrixBoundaryIterator::new(AlignmentState::Deletion, dimensions) {
            self.deletion_matrix[index] = self.compute_deletion_entry(index, gap_penalty);
        }
        for index in AlignmentMatrixBoundaryIterator::new(AlignmentState::Insertion, dimensions) {
            self.insertion_matrix[index] = self.compute_insertion_entry(index, gap_penalty);
        }
    }

    fn align_inner(&mut self, scoring: &ScoringModel, gap_penalty: GapPenalty) {
        for index in AlignmentMatrixInnerIterator::new(self.dimensions()) {
            self.match_matrix[index] = self.compute_match_entry(index, scoring);
            self.insertion_matrix[index] = self.compute_insertion_entry(index, gap_penalty);
            self.deletion_matrix[index] = self.compute_deletion_entry(index, gap_penalty);
        }
    }

    fn compute_match_entry(
        &self,
        index: AlignmentMatrixIndex,
        scoring: &ScoringModel,
    ) -> AlignmentMatrixEntry {
        let (reference_character, query_character) = self.sequences.characters(index);
        let substitution_score = scoring.score(reference_character, query_character);
        let (predecessor, predecessor_score) = self.best_state_at(index.match_predecessor());

        AlignmentMatrixEntry {
            score: predecessor_score + substitution_score,
            predecessor: Some(predecessor),
        }
    }

    fn compute_insertion_entry(
        &self,
        index: AlignmentMatrixIndex,
        gap_penalty: GapPenalty,
    ) -> AlignmentMatrixEntry {
        Self::open_or_extend(
            self.match_matrix[index.insertion_predecessor()].score + gap_penalty.open,
            self.insertion_matrix[index.insertion_predecessor()].score + gap_penalty.extend,
            AlignmentState::Insertion,
        )
    }

    fn compute_deletion_entry(
        &self,
        index: AlignmentMatrixIndex,
        gap_penalty: GapPenalty,
    ) -> AlignmentMatrixEntry {
        Self::open_or_extend(
            self.match_matrix[index.deletion_predecessor()].score + gap_penalty.open,
            self.deletion_matrix[index.deletion_predecessor()].score + gap_penalty.extend,
            AlignmentState::Deletion,
        )
    }

    /// Opening a gap wins ties against extending one.
    fn open_or_extend(
        open_score: ExtendedScore,
        extend_score: ExtendedScore,
        gap_state: AlignmentState,
    ) -> AlignmentMatrixEntry {
        if open_score >= extend_score {
            AlignmentMatrixEntry {
                score: open_score,
                predecessor: Some(AlignmentState::Match),
            }
        } else {
            AlignmentMatrixEntry {
                score: extend_score,
                predecessor: Some(gap_state),
            }
        }
    }

    #[cfg(test)]
    fn manual_debug_fill(
        &mut self,
        state: AlignmentState,
        entries: impl IntoIterator<Item = AlignmentMatrixEntry>,
    ) {
        let mut entries = entries.into_iter();
        let dimensions = self.dimensions();
        let matrix = match state {
            AlignmentState::Match => &mut self.match_matrix,
            AlignmentState::Insertion => &mut self.insertion_matrix,
            AlignmentState::Deletion => &mut self.deletion_matrix,
        };
        for index in AlignmentMatrixInnerIterator::new(dimensions) {
            matrix[index] = entries.next().unwrap();
        }
        assert!(entries.next().is_none());
    }
}

impl Default for AlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            score: ExtendedScore::min_value(),
            predecessor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        gap_penalty::GapPenalty,
        score::{ExtendedScore, Score},
        scoring::ScoringModel,
        sequences::AlignmentSequences,
    };

    use super::{AlignmentMatrix, AlignmentMatrixEntry, AlignmentState, index::AlignmentMatrixIndex};

    fn finite(score: i64, predecessor: AlignmentState) -> AlignmentMatrixEntry {
        AlignmentMatrixEntry {
            score: ExtendedScore::Finite(score.into()),
            predecessor: Some(predecessor),
        }
    }

    fn unreachable(predecessor: AlignmentState) -> AlignmentMatrixEntry {
        AlignmentMatrixEntry {
            score: ExtendedScore::NegativeInfinity,
            predecessor: Some(predecessor),
        }
    }

    #[test]
    fn boundary_holds_leading_gaps() {
        let sequences = AlignmentSequences::new(b"ACGT", b"AGT").unwrap();
        let matrix = AlignmentMatrix::new(
            sequences,
            &ScoringModel::dna_default(),
            GapPenalty::new(-2, -1),
        );

        let origin = AlignmentMatrixIndex::new(0, 0);
        assert_eq!(
            matrix.entry(AlignmentState::Match, origin).score,
            Score::ZERO.into()
        );
        assert_eq!(
            matrix.entry(AlignmentState::Insertion, origin).score,
            ExtendedScore::NegativeInfinity
        );
        assert_eq!(
            matrix.entry(AlignmentState::Deletion, origin).score,
            ExtendedScore::NegativeInfinity
        );

        for reference_index in 1..=4 {
            let index = AlignmentMatrixIndex::new(reference_index, 0);
            let expected_predecessor = if reference_index == 1 {
                AlignmentState::Match
            } else {
                AlignmentState::Deletion
            };
            assert_eq!(
                matrix.entry(AlignmentState::Deletion, index),
                finite(-2 - (reference_index as i64 - 1), expected_predecessor)
            );
            assert_eq!(
                matrix.entry(AlignmentState::Match, index).score,
                ExtendedScore::NegativeInfinity
            );
            assert_eq!(
                matrix.entry(AlignmentState::Insertion, index).score,
                ExtendedScore::NegativeInfinity
            );
        }

        for query_index in 1..=3 {
            let index = AlignmentMatrixIndex::new(0, query_index);
            assert_eq!(
                matrix.entry(AlignmentState::Insertion, index).score,
                ExtendedScore::Finite((-2 - (query_index as i64 - 1)).into())
            );
            assert_eq!(
                matrix.entry(AlignmentState::Match, index).score,
                ExtendedScore::NegativeInfinity
            );
            assert_eq!(
                matrix.entry(AlignmentState::Deletion, index).score,
                ExtendedScore::NegativeInfinity
            );
        }
    }

    #[test]
    fn simple_matrices() {
        let sequences = AlignmentSequences::new(b"AC", b"A").unwrap();
        let matrix = AlignmentMatrix::new(
            sequences,
            &ScoringModel::dna_default(),
            GapPenalty::new(-2, -1),
        );

        // Inner entries are listed row by row: (1, 1), (2, 1).
        let mut manual_matrix = matrix.clone();
        manual_matrix.manual_debug_fill(
            AlignmentState::Match,
            [
                finite(2, AlignmentState::Match),
                // max(D[1][0] = -2) - 1
                finite(-3, AlignmentState::Deletion),
            ],
        );
        manual_matrix.manual_debug_fill(
            AlignmentState::Insertion,
            [
                // max(M[1][0] - 2 = -inf, I[1][0] - 1 = -inf), the open wins the tie.
                unreachable(AlignmentState::Match),
                // max(M[2][0] - 2 = -inf, I[2][0] - 1 = -inf)
                unreachable(AlignmentState::Match),
            ],
        );
        manual_matrix.manual_debug_fill(
            AlignmentState::Deletion,
            [
                // max(M[0][1] - 2 = -inf, D[0][1] - 1 = -inf)
                unreachable(AlignmentState::Match),
                // max(M[1][1] - 2 = 0, D[1][1] - 1 = -inf)
                finite(0, AlignmentState::Match),
            ],
        );
        assert_eq!(
            matrix, manual_matrix,
            "matrix:\n{matrix}\nmanual_matrix:\n{manual_matrix}"
        );
        assert_eq!(
            matrix.best_end_state(),
            (AlignmentState::Deletion, ExtendedScore::Finite(0.into()))
        );
    }

    #[test]
    fn state_ties_prefer_match_then_insertion_then_deletion() {
        let sequences = AlignmentSequences::new(b"AA", b"AA").unwrap();
        let mut matrix = AlignmentMatrix::new(
            sequences,
            &ScoringModel::dna_default(),
            GapPenalty::new(-2, -1),
        );

        for (scores, expected_state) in [
            ([0, 0, 0], AlignmentState::Match),
            ([-1, 0, 0], AlignmentState::Insertion),
            ([-1, -1, 0], AlignmentState::Deletion),
            ([0, -1, 0], AlignmentState::Match),
        ] {
            for (state, score) in AlignmentState::PREFERENCE_ORDER.into_iter().zip(scores) {
                matrix.manual_debug_fill(
                    state,
                    [
                        finite(score, AlignmentState::Match),
                        finite(-10, AlignmentState::Match),
                        finite(-10, AlignmentState::Match),
                        finite(-10, AlignmentState::Match),
                    ],
                );
            }

            assert_eq!(
                matrix.best_state_at(AlignmentMatrixIndex::new(1, 1)),
                (expected_state, ExtendedScore::Finite(0.into()))
            );
        }
    }

    #[test]
    fn gap_ties_prefer_open() {
        let tied = ExtendedScore::Finite((-3).into());
        assert_eq!(
            AlignmentMatrix::open_or_extend(tied, tied, AlignmentState::Insertion),
            finite(-3, AlignmentState::Match)
        );
        assert_eq!(
            AlignmentMatrix::open_or_extend(
                tied,
                ExtendedScore::Finite((-2).into()),
                AlignmentState::Deletion
            ),
            finite(-2, AlignmentState::Deletion)
        );
    }

    #[test]
    fn match_entry_tie_prefers_match_over_insertion() {
        // With zero scores, (1, 2) holds zero in both the match and the insertion matrix.
        let sequences = AlignmentSequences::new(b"AA", b"AAA").unwrap();
        let scoring = ScoringModel::new("zero", [(b'A', b'A', Score::from(0))]);
        let matrix = AlignmentMatrix::new(sequences, &scoring, GapPenalty::new(0, 0));

        let index = AlignmentMatrixIndex::new(1, 2);
        assert_eq!(
            matrix.entry(AlignmentState::Match, index),
            finite(0, AlignmentState::Insertion)
        );
        assert_eq!(
            matrix.entry(AlignmentState::Insertion, index),
            finite(0, AlignmentState::Match)
        );
        assert_eq!(
            matrix.entry(AlignmentState::Match, AlignmentMatrixIndex::new(2, 3)),
            finite(0, AlignmentState::Match)
        );
    }
}
