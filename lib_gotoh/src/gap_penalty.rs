use std::fmt::Display;

use crate::score::Score;

/// An affine gap penalty.
///
/// A gap of length `L` scores `open + (L - 1) * extend`.
/// Both values are added to the alignment score as they are, so penalties are usually negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapPenalty {
    pub open: Score,
    pub extend: Score,
}

impl GapPenalty {
    pub fn new(open: impl Into<Score>, extend: impl Into<Score>) -> Self {
        Self {
            open: open.into(),
            extend: extend.into(),
        }
    }

    /// The score of a single gap column, depending on whether it opens a new gap or extends a gap.
    pub fn score(&self, is_first: bool) -> Score {
        if is_first { self.open } else { self.extend }
    }

    /// The score of a whole gap of the given length.
    ///
    /// A gap of length zero scores zero.
    pub fn gap_score(&self, length: usize) -> Score {
        if length == 0 {
            Score::ZERO
        } else {
            let extensions = i64::try_from(length - 1).unwrap_or(i64::MAX);
            Score::from(self.open.as_i64() + extensions * self.extend.as_i64())
        }
    }
}

impl Default for GapPenalty {
    fn default() -> Self {
        Self::new(-2, -1)
    }
}

impl Display for GapPenalty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "open {}, extend {}", self.open, self.extend)
    }
}

#[cfg(test)]
mod tests {
    use super::GapPenalty;

    #[test]
    fn gap_score() {
        let gap_penalty = GapPenalty::new(-5, -2);
        assert_eq!(gap_penalty.gap_score(0).as_i64(), 0);
        assert_eq!(gap_penalty.gap_score(1).as_i64(), -5);
        assert_eq!(gap_penalty.gap_score(4).as_i64(), -11);
        assert_eq!(gap_penalty.score(true), gap_penalty.open);
        assert_eq!(gap_penalty.score(false), gap_penalty.extend);
    }
}
