//! Minimum-step, minimum-coin pathfinding over weighted-cell mazes.
//!
//! Movement is 8-way with unit step cost. Among all paths with the fewest
//! steps, the search returns one that collects the fewest coins. Ordering is
//! purely by accumulated cost (no heuristic), so this is Dijkstra's
//! algorithm over the lexicographic weight `(steps, coins)`.
//!
//! Searches run through [`PathFinder`], which owns and reuses its frontier,
//! node arena and visited table so that repeated queries avoid reallocating.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`CoinPather`] : [`Pather`] | [`PathFinder::solve`] |

mod cost;
mod finder;
mod result;
mod traits;

pub use cost::Cost;
pub use finder::{PathFinder, SearchStats, solve};
pub use result::{SearchResult, UNREACHABLE_COINS};
pub use traits::{CoinPather, Pather};
