//! The [`Tile`] type — one maze cell symbol.

/// A single maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// The start marker `S`. Costs no coins.
    Start,
    /// The goal marker `G`. Costs no coins.
    Goal,
    /// A wall `X`. Never entered.
    Wall,
    /// A traversable cell carrying a coin weight in `0..=9`.
    Open(u8),
}

impl Tile {
    /// Parse a maze character. Returns `None` for anything other than
    /// `S`, `G`, `X` or a decimal digit.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            'X' => Some(Self::Wall),
            _ => ch.to_digit(10).map(|d| Self::Open(d as u8)),
        }
    }

    /// The character this tile is written as.
    pub fn to_char(self) -> char {
        match self {
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Wall => 'X',
            Self::Open(w) => char::from(b'0' + w.min(9)),
        }
    }

    /// Whether the tile may be entered.
    #[inline]
    pub fn passable(self) -> bool {
        self != Self::Wall
    }

    /// Coins collected by entering this tile.
    #[inline]
    pub fn coins(self) -> u32 {
        match self {
            Self::Open(w) => u32::from(w),
            _ => 0,
        }
    }
}
