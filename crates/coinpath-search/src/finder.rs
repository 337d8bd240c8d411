use std::collections::{BinaryHeap, HashMap};

use coinpath_core::{Coord, Puzzle};

use crate::cost::Cost;
use crate::result::SearchResult;
use crate::traits::CoinPather;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// One partial path: its end cell, its cost and the node it extends.
///
/// Nodes are never mutated once pushed; expanding a node appends new ones.
#[derive(Clone, Copy)]
struct Node {
    pos: Coord,
    cost: Cost,
    parent: usize,
}

/// Frontier entry referring to a node in the arena.
///
/// `idx` is also the push order, which settles ties on equal cost.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    cost: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first,
        // and the earliest pushed among equals.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters for the most recent [`PathFinder::solve`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States pushed onto the frontier, the initial one included.
    pub pushed: usize,
    /// States removed from the frontier.
    pub popped: usize,
    /// Popped states discarded because their cell was already reached at an
    /// equal or lower cost.
    pub pruned: usize,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable minimum-step, minimum-coin searcher.
///
/// `PathFinder` keeps its frontier, node arena and visited table between
/// calls; each [`solve`](Self::solve) clears them first, so one finder can
/// serve many mazes. Separate finders share nothing and may run on
/// different threads against the same maze.
#[derive(Default)]
pub struct PathFinder {
    arena: Vec<Node>,
    open: BinaryHeap<NodeRef>,
    visited: HashMap<Coord, Cost>,
    nbuf: Vec<Coord>,
    stats: SearchStats,
}

impl PathFinder {
    /// Create a new `PathFinder` with empty caches.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(8),
            ..Self::default()
        }
    }

    /// Counters for the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find the path from `start` to `goal` with the fewest steps, and among
    /// those the fewest coins.
    ///
    /// `start` and `goal` must be passable cells of `pather`. When they
    /// coincide the result is `[start]` with zero coins. Among paths with
    /// equal steps and coins, the one whose states were pushed first wins.
    pub fn solve<P: CoinPather>(&mut self, pather: &P, start: Coord, goal: Coord) -> SearchResult {
        self.arena.clear();
        self.open.clear();
        self.visited.clear();
        self.stats = SearchStats::default();

        self.push(start, Cost::ZERO, NO_PARENT);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search None;
            };
            self.stats.popped += 1;

            let ci = current.idx;
            let Node { pos, cost, .. } = self.arena[ci];

            if pos == goal {
                break 'search Some(ci);
            }

            // Dominance: an equal or cheaper visit already expanded this cell.
            if self.visited.get(&pos).is_some_and(|&seen| seen <= cost) {
                self.stats.pruned += 1;
                log::trace!("pruned {pos} at {cost}");
                continue;
            }
            self.visited.insert(pos, cost);

            nbuf.clear();
            pather.neighbors(pos, &mut nbuf);

            for &np in nbuf.iter() {
                self.push(np, cost.step(pather.coins(np)), ci);
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "search {start} -> {goal}: pushed {}, popped {}, pruned {}, visited {}",
            self.stats.pushed,
            self.stats.popped,
            self.stats.pruned,
            self.visited.len()
        );

        match found {
            Some(gi) => SearchResult::Found {
                coins: self.arena[gi].cost.coins,
                path: self.path_to(gi),
            },
            None => SearchResult::Unreachable,
        }
    }

    fn push(&mut self, pos: Coord, cost: Cost, parent: usize) {
        let idx = self.arena.len();
        self.arena.push(Node { pos, cost, parent });
        self.open.push(NodeRef { idx, cost });
        self.stats.pushed += 1;
    }

    /// Walk parent links back from `idx` and return the forward path.
    fn path_to(&self, mut idx: usize) -> Vec<Coord> {
        let mut path = Vec::with_capacity(self.arena[idx].cost.steps as usize + 1);
        while idx != NO_PARENT {
            let node = &self.arena[idx];
            path.push(node.pos);
            idx = node.parent;
        }
        path.reverse();
        path
    }
}

/// Solve a loaded maze with a fresh [`PathFinder`].
pub fn solve(puzzle: &Puzzle) -> SearchResult {
    PathFinder::new().solve(&puzzle.maze, puzzle.start, puzzle.goal)
}
