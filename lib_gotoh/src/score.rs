use std::{
    fmt::Display,
    ops::{Add, AddAssign},
};

use num_traits::{Bounded, Zero};

/// The score of an alignment.
///
/// Scores are maximised, and unlike costs they may be negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(i64);

/// A score that may be minus infinity.
///
/// Minus infinity marks alignment matrix states that cannot be reached.
/// It compares lower than every finite score, and adding a finite score to it keeps it at minus infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExtendedScore {
    NegativeInfinity,
    Finite(Score),
}

impl Score {
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);
    pub const ZERO: Self = Self(0);

    pub const fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl ExtendedScore {
    pub fn finite(self) -> Option<Score> {
        match self {
            Self::NegativeInfinity => None,
            Self::Finite(score) => Some(score),
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Score> for ExtendedScore {
    fn from(value: Score) -> Self {
        Self::Finite(value)
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Add<Score> for ExtendedScore {
    type Output = ExtendedScore;

    fn add(self, rhs: Score) -> Self::Output {
        match self {
            Self::NegativeInfinity => Self::NegativeInfinity,
            Self::Finite(score) => Self::Finite(score + rhs),
        }
    }
}

impl Zero for Score {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Score {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl Bounded for ExtendedScore {
    fn min_value() -> Self {
        Self::NegativeInfinity
    }

    fn max_value() -> Self {
        Self::Finite(Score::max_value())
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Display for ExtendedScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeInfinity => write!(f, "-inf"),
            Self::Finite(score) => score.fmt(f),
        }
    }
}
