use std::fmt::Display;

/// A run-length encoded sequence of alignment columns.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    alignment: Vec<(usize, AlignmentType)>,
}

/// The kind of a single alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentType {
    /// The reference and the query contain the same character.
    Match,
    /// The reference and the query contain different characters.
    Substitution,
    /// The query contains a character that is missing from the reference.
    Insertion,
    /// The query is missing a character present in the reference.
    Deletion,
}

impl Alignment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, alignment_type: AlignmentType) {
        if let Some((multiplicity, last_alignment_type)) = self.alignment.last_mut() {
            if *last_alignment_type == alignment_type {
                *multiplicity += 1;
                return;
            }
        }

        self.alignment.push((1, alignment_type));
    }

    /// Iterate over runs of equal alignment types.
    pub fn iter_compact(&self) -> impl Iterator<Item = (usize, AlignmentType)> + '_ {
        self.alignment.iter().copied()
    }

    /// Iterate over single alignment columns.
    pub fn iter_flat(&self) -> impl Iterator<Item = AlignmentType> + '_ {
        self.alignment
            .iter()
            .flat_map(|(multiplicity, alignment_type)| {
                std::iter::repeat_n(*alignment_type, *multiplicity)
            })
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.alignment
            .iter()
            .map(|(multiplicity, _)| multiplicity)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    pub fn cigar(&self) -> String {
        self.to_string()
    }

    pub fn reverse(&mut self) {
        self.alignment.reverse();
    }
}

impl From<Vec<(usize, AlignmentType)>> for Alignment {
    fn from(value: Vec<(usize, AlignmentType)>) -> Self {
        Self { alignment: value }
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (multiplicity, alignment_type) in &self.alignment {
            write!(f, "{multiplicity}{alignment_type}")?;
        }
        Ok(())
    }
}

impl Display for AlignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AlignmentType::Match => "M",
                AlignmentType::Substitution => "X",
                AlignmentType::Insertion => "I",
                AlignmentType::Deletion => "D",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Alignment, AlignmentType};

    #[test]
    fn push_merges_runs() {
        let mut alignment = Alignment::new();
        for alignment_type in [
            AlignmentType::Match,
            AlignmentType::Match,
            AlignmentType::Deletion,
            AlignmentType::Match,
            AlignmentType::Substitution,
            AlignmentType::Substitution,
        ] {
            alignment.push(alignment_type);
        }

        assert_eq!(alignment.cigar(), "2M1D1M2X");
        assert_eq!(alignment.len(), 6);
        assert_eq!(alignment.iter_flat().nth(2), Some(AlignmentType::Deletion));

        alignment.reverse();
        assert_eq!(alignment.cigar(), "2X1M1D2M");
    }
}
