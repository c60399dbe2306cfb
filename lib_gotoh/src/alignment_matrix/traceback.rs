use crate::{
    alignment_result::{
        AlignmentResult,
        alignment::{Alignment, AlignmentType},
    },
    sequences::GAP_CHARACTER,
};

use super::{AlignmentMatrix, AlignmentState};

impl AlignmentMatrix<'_, '_> {
    /// Reconstructs an optimal alignment by following the backpointers from the end of the matrices to the origin.
    ///
    /// # Panics
    ///
    /// Panics if the backpointers lead out of the matrices or to an entry that was never computed.
    /// This cannot happen for matrices built by [`AlignmentMatrix::new`].
    pub fn traceback(&self) -> AlignmentResult {
        let (mut state, end_score) = self.best_end_state();
        let score = end_score
            .finite()
            .unwrap_or_else(|| panic!("The alignment matrices contain no finite score at their end"));

        let mut index = self.end_index();
        let capacity = index.reference_index + index.query_index;
        let mut aligned_reference = Vec::with_capacity(capacity);
        let mut aligned_query = Vec::with_capacity(capacity);
        let mut alignment = Alignment::new();

        while !index.is_origin() {
            assert!(
                index.has_predecessor(state),
                "Traceback reached index {index} in state {state:?}, which has no predecessor in that state"
            );

            let (reference_character, query_character, alignment_type) = match state {
                AlignmentState::Match => {
                    let (reference_character, query_character) = self.sequences.characters(index);
                    let alignment_type = if reference_character == query_character {
                        AlignmentType::Match
                    } else {
                        AlignmentType::Substitution
                    };
                    (reference_character, query_character, alignment_type)
                }
                AlignmentState::Insertion => (
                    GAP_CHARACTER,
                    self.sequences.query_character(index),
                    AlignmentType::Insertion,
                ),
                AlignmentState::Deletion => (
                    self.sequences.reference_character(index),
                    GAP_CHARACTER,
                    AlignmentType::Deletion,
                ),
            };
            aligned_reference.push(reference_character);
            aligned_query.push(query_character);
            alignment.push(alignment_type);

            let predecessor = self.entry(state, index).predecessor.unwrap_or_else(|| {
                panic!("Traceback reached index {index} in state {state:?}, which has no backpointer")
            });
            index = index.predecessor(state);
            state = predecessor;
        }

        aligned_reference.reverse();
        aligned_query.reverse();
        alignment.reverse();

        AlignmentResult::new(aligned_reference, aligned_query, alignment, score)
    }
}
