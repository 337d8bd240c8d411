//! Reading mazes from their text form.
//!
//! One line per row, one character per cell: `S` start, `G` goal, `X` wall,
//! or a digit `0`–`9` for an open cell worth that many coins. Rows need not
//! have the same length. Surrounding whitespace on each line is ignored, as
//! are trailing blank lines.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Coord;
use crate::maze::Maze;
use crate::tile::Tile;

/// Errors that make a maze unusable.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid cell \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Coord },
    #[error("maze has no start cell `S`")]
    MissingStart,
    #[error("maze has no goal cell `G`")]
    MissingGoal,
    #[error("maze has more than one start cell: {first} and {second}")]
    DuplicateStart { first: Coord, second: Coord },
    #[error("maze has more than one goal cell: {first} and {second}")]
    DuplicateGoal { first: Coord, second: Coord },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A validated maze together with its start and goal coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub maze: Maze,
    pub start: Coord,
    pub goal: Coord,
}

impl FromStr for Puzzle {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze(s)
    }
}

/// Parse a maze from text, requiring exactly one `S` and exactly one `G`.
pub fn parse_maze(text: &str) -> Result<Puzzle, MazeError> {
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    let mut start: Option<Coord> = None;
    let mut goal: Option<Coord> = None;

    for (r, line) in text.lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (c, ch) in line.trim().chars().enumerate() {
            let pos = Coord::new(r as i32, c as i32);
            let tile = Tile::from_char(ch).ok_or(MazeError::InvalidTile { ch, pos })?;
            match tile {
                Tile::Start => {
                    if let Some(first) = start {
                        return Err(MazeError::DuplicateStart { first, second: pos });
                    }
                    start = Some(pos);
                }
                Tile::Goal => {
                    if let Some(first) = goal {
                        return Err(MazeError::DuplicateGoal { first, second: pos });
                    }
                    goal = Some(pos);
                }
                _ => {}
            }
            row.push(tile);
        }
        rows.push(row);
    }

    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }

    let start = start.ok_or(MazeError::MissingStart)?;
    let goal = goal.ok_or(MazeError::MissingGoal)?;
    let maze = Maze::new(rows);
    log::debug!(
        "parsed maze: {} rows, widest {}, start {start}, goal {goal}",
        maze.height(),
        maze.width()
    );
    Ok(Puzzle { maze, start, goal })
}

/// Read and parse a maze file.
pub fn load_maze(path: impl AsRef<Path>) -> Result<Puzzle, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_maze(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
S10
0X0
01G
";

    #[test]
    fn parse_small() {
        let puzzle = parse_maze(SMALL).unwrap();
        assert_eq!(puzzle.start, Coord::new(0, 0));
        assert_eq!(puzzle.goal, Coord::new(2, 2));
        assert_eq!(puzzle.maze.height(), 3);
        assert_eq!(puzzle.maze.at(Coord::new(1, 1)), Some(Tile::Wall));
        assert_eq!(puzzle.maze.at(Coord::new(0, 1)), Some(Tile::Open(1)));
    }

    #[test]
    fn from_str_matches_parse() {
        let puzzle: Puzzle = SMALL.parse().unwrap();
        assert_eq!(puzzle, parse_maze(SMALL).unwrap());
    }

    #[test]
    fn whitespace_and_crlf_are_trimmed() {
        let puzzle = parse_maze("  S1 \r\n0G\r\n\r\n\n").unwrap();
        assert_eq!(puzzle.maze.height(), 2);
        assert_eq!(puzzle.maze.row_len(0), 2);
        assert_eq!(puzzle.goal, Coord::new(1, 1));
    }

    #[test]
    fn ragged_rows_are_kept() {
        let puzzle = parse_maze("S123\n0\n9G").unwrap();
        assert_eq!(puzzle.maze.row_len(0), 4);
        assert_eq!(puzzle.maze.row_len(1), 1);
        assert_eq!(puzzle.maze.at(Coord::new(1, 3)), None);
    }

    #[test]
    fn invalid_character() {
        let err = parse_maze("S1.\n00G").unwrap_err();
        match err {
            MazeError::InvalidTile { ch, pos } => {
                assert_eq!(ch, '.');
                assert_eq!(pos, Coord::new(0, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_markers() {
        assert!(matches!(parse_maze("0000\n000G"), Err(MazeError::MissingStart)));
        assert!(matches!(parse_maze("S000\n0000"), Err(MazeError::MissingGoal)));
        assert!(matches!(parse_maze(""), Err(MazeError::MissingStart)));
    }

    #[test]
    fn duplicate_markers() {
        assert!(matches!(
            parse_maze("S0S\n00G"),
            Err(MazeError::DuplicateStart { first, second })
                if first == Coord::new(0, 0) && second == Coord::new(0, 2)
        ));
        assert!(matches!(
            parse_maze("S0G\nG00"),
            Err(MazeError::DuplicateGoal { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_maze("/nonexistent/coinpath/maze.txt").unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
        assert!(err.to_string().contains("maze.txt"));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("coinpath-load-{}.txt", std::process::id()));
        fs::write(&path, SMALL).unwrap();
        let puzzle = load_maze(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(puzzle.goal, Coord::new(2, 2));
    }
}
