use std::fmt::Display;

use super::{AlignmentMatrix, AlignmentState};

/// Renders the scores and backpointers of one state matrix, labelled with the sequence characters.
///
/// Each entry is printed as its score followed by the letter of its predecessor state,
/// or `N` if it has none.
pub struct StateMatrixDisplay<'matrix, 'reference, 'query> {
    matrix: &'matrix AlignmentMatrix<'reference, 'query>,
    state: AlignmentState,
}

impl<'reference, 'query> AlignmentMatrix<'reference, 'query> {
    pub fn display_state(&self, state: AlignmentState) -> StateMatrixDisplay<'_, 'reference, 'query> {
        StateMatrixDisplay {
            matrix: self,
            state,
        }
    }
}

impl Display for StateMatrixDisplay<'_, '_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let matrix = self.matrix.state_matrix(self.state);
        let reference = self.matrix.sequences().reference();
        let query = self.matrix.sequences().query();
        let (rows, columns) = matrix.dim();

        let mut column_widths = vec![1; columns];
        for row in matrix.rows() {
            for (entry, column_width) in row.iter().zip(column_widths.iter_mut()) {
                *column_width = entry.score.to_string().len().max(*column_width);
            }
        }

        // Header with query characters, leaving room for the reference labels.
        let mut header = String::from("    ");
        for (query_index, column_width) in column_widths.iter().enumerate() {
            let label = if query_index == 0 {
                ' '
            } else {
                char::from(query[query_index - 1])
            };
            header.push_str(&format!("{label: >width$}  ", width = *column_width));
        }
        writeln!(f, "{}", header.trim_end())?;

        for reference_index in 0..rows {
            let label = if reference_index == 0 {
                ' '
            } else {
                char::from(reference[reference_index - 1])
            };
            write!(f, "{label} [ ")?;
            #[allow(clippy::needless_range_loop)]
            for query_index in 0..columns {
                let entry = matrix[[reference_index, query_index]];
                write!(
                    f,
                    "{: >width$}{}",
                    entry.score.to_string(),
                    entry.predecessor.as_ref().map(AlignmentState::letter).unwrap_or('N'),
                    width = column_widths[query_index],
                )?;
                if query_index + 1 < columns {
                    write!(f, " ")?;
                }
            }
            writeln!(f, " ]")?;
        }

        Ok(())
    }
}

impl Display for AlignmentMatrix<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, state) in AlignmentState::PREFERENCE_ORDER.into_iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{state:?} matrix ({}):", state.letter())?;
            write!(f, "{}", self.display_state(state))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_matrix::{AlignmentMatrix, AlignmentState},
        gap_penalty::GapPenalty,
        scoring::ScoringModel,
        sequences::AlignmentSequences,
    };

    #[test]
    fn display_deletion_matrix() {
        let sequences = AlignmentSequences::new(b"AC", b"A").unwrap();
        let matrix = AlignmentMatrix::new(
            sequences,
            &ScoringModel::dna_default(),
            GapPenalty::new(-2, -1),
        );

        assert_eq!(
            matrix.display_state(AlignmentState::Deletion).to_string(),
            concat!(
                "             A\n",
                "  [ -infN -infN ]\n",
                "A [   -2M -infM ]\n",
                "C [   -3D    0M ]\n",
            )
        );
    }
}
