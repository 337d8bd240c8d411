use coinpath_core::Coord;

/// Coin total reported for an unreachable goal.
pub const UNREACHABLE_COINS: i64 = -1;

/// Outcome of one search.
///
/// An unreachable goal is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A step-minimal path with the fewest coins among such paths.
    /// `path` runs from start to goal, both included.
    Found { coins: u32, path: Vec<Coord> },
    /// No path connects start and goal.
    Unreachable,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The path, or an empty slice if the goal is unreachable.
    pub fn path(&self) -> &[Coord] {
        match self {
            Self::Found { path, .. } => path,
            Self::Unreachable => &[],
        }
    }

    /// Coins collected, or `None` if the goal is unreachable.
    pub fn coins(&self) -> Option<u32> {
        match self {
            Self::Found { coins, .. } => Some(*coins),
            Self::Unreachable => None,
        }
    }

    /// Coins collected, or [`UNREACHABLE_COINS`] if the goal is unreachable.
    pub fn coins_or_sentinel(&self) -> i64 {
        self.coins().map_or(UNREACHABLE_COINS, i64::from)
    }

    /// Number of moves on the path (`path_len() - 1`), if found.
    pub fn steps(&self) -> Option<usize> {
        match self {
            Self::Found { path, .. } => Some(path.len().saturating_sub(1)),
            Self::Unreachable => None,
        }
    }

    /// Number of coordinates on the path; 0 if the goal is unreachable.
    pub fn path_len(&self) -> usize {
        self.path().len()
    }
}
