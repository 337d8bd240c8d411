//! The [`Maze`] type — an immutable grid of [`Tile`]s.
//!
//! Rows keep the length they had in the source text, so a maze may be
//! ragged. Any coordinate past the end of its own row is out of bounds,
//! which is distinct from hitting a [`Tile::Wall`].
//!
//! Cloning a `Maze` yields another handle to the **same** read-only storage,
//! so one maze can be shared by several searches, including across threads.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::geom::Coord;
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
struct MazeBuffer {
    rows: Vec<Vec<Tile>>,
}

impl MazeBuffer {
    #[inline]
    fn get(&self, p: Coord) -> Option<Tile> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.rows
            .get(p.row as usize)
            .and_then(|r| r.get(p.col as usize))
            .copied()
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A read-only 2D grid of [`Tile`]s backed by shared storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    buffer: Arc<MazeBuffer>,
}

impl Maze {
    /// Build a maze from rows of tiles.
    ///
    /// No check is made on the start and goal markers; use
    /// [`parse_maze`](crate::parse_maze) for validated input.
    pub fn new(rows: Vec<Vec<Tile>>) -> Self {
        Self {
            buffer: Arc::new(MazeBuffer { rows }),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.buffer.rows.len()
    }

    /// Length of the given row, or 0 if the row does not exist.
    #[inline]
    pub fn row_len(&self, row: usize) -> usize {
        self.buffer.rows.get(row).map_or(0, Vec::len)
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.buffer.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of cells over all rows.
    pub fn len(&self) -> usize {
        self.buffer.rows.iter().map(Vec::len).sum()
    }

    /// Whether the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` addresses an existing cell.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.buffer.get(p).is_some()
    }

    /// Read the tile at `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<Tile> {
        self.buffer.get(p)
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> MazeIter<'_> {
        MazeIter {
            maze: self,
            row: 0,
            col: 0,
        }
    }

    /// Render the maze as text with the cells of `path` drawn as `*`.
    ///
    /// Start and goal keep their markers.
    pub fn render(&self, path: &[Coord]) -> String {
        let on_path: HashSet<Coord> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.len() + self.height());
        for (r, row) in self.buffer.rows.iter().enumerate() {
            for (c, &tile) in row.iter().enumerate() {
                let p = Coord::new(r as i32, c as i32);
                let ch = match tile {
                    Tile::Open(_) if on_path.contains(&p) => '*',
                    t => t.to_char(),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.buffer.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MazeIter
// ---------------------------------------------------------------------------

/// Iterator over `(Coord, Tile)` pairs in a [`Maze`].
pub struct MazeIter<'a> {
    maze: &'a Maze,
    row: usize,
    col: usize,
}

impl Iterator for MazeIter<'_> {
    type Item = (Coord, Tile);

    fn next(&mut self) -> Option<Self::Item> {
        let rows = &self.maze.buffer.rows;
        while self.row < rows.len() {
            if let Some(&tile) = rows[self.row].get(self.col) {
                let p = Coord::new(self.row as i32, self.col as i32);
                self.col += 1;
                return Some((p, tile));
            }
            self.row += 1;
            self.col = 0;
        }
        None
    }
}
