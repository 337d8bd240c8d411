use coinpath_core::{Coord, Maze, Tile};

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the enterable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather whose cells carry a coin weight.
pub trait CoinPather: Pather {
    /// Coins collected by stepping onto `to`.
    fn coins(&self, to: Coord) -> u32;
}

impl Pather for Maze {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            p.neighbors_8()
                .into_iter()
                .filter(|&n| self.at(n).is_some_and(Tile::passable)),
        );
    }
}

impl CoinPather for Maze {
    #[inline]
    fn coins(&self, to: Coord) -> u32 {
        self.at(to).map_or(0, Tile::coins)
    }
}
