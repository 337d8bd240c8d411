use std::fmt;

/// Accumulated cost of a partial path.
///
/// Compared lexicographically: fewer `steps` wins, ties go to fewer `coins`.
/// The derived ordering relies on the field order below.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub steps: u32,
    pub coins: u32,
}

impl Cost {
    /// Cost of the empty path at the start cell.
    pub const ZERO: Self = Self { steps: 0, coins: 0 };

    /// Create a new cost.
    #[inline]
    pub const fn new(steps: u32, coins: u32) -> Self {
        Self { steps, coins }
    }

    /// Cost after one more move onto a cell worth `coins`.
    #[inline]
    pub const fn step(self, coins: u32) -> Self {
        Self {
            steps: self.steps + 1,
            coins: self.coins + coins,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps/{} coins", self.steps, self.coins)
    }
}
