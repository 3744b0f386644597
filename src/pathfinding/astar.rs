//! Weighted A* over the 8-connected grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use super::{GridPathfinder, SearchOutcome};
use crate::models::{GridMap, GridPos};

/// Configuration for [`AStarSearcher`].
///
/// # Examples
///
/// ```
/// use grid_tour::pathfinding::AStarConfig;
///
/// let config = AStarConfig::default().with_heuristic_weight(1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AStarConfig {
    /// Multiplier applied to the octile heuristic. `1.0` keeps the
    /// heuristic admissible and the result optimal; larger values trade
    /// path quality for a much smaller explored frontier.
    pub heuristic_weight: f64,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            heuristic_weight: 100.0,
        }
    }
}

impl AStarConfig {
    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.heuristic_weight.is_finite() || self.heuristic_weight < 0.0 {
            return Err(format!(
                "heuristic_weight must be finite and non-negative, got {}",
                self.heuristic_weight
            ));
        }
        Ok(())
    }
}

/// Entry in the open set, ordered as a min-heap on `f`.
#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f: f64,
    index: u32,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.index == other.index
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest f first.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

const NO_PARENT: u32 = u32::MAX;

/// The eight moves: orthogonal steps cost 1, diagonal steps `sqrt(2)`.
const MOVES: [(i32, i32, f64); 8] = [
    (1, 0, 1.0),
    (-1, 0, 1.0),
    (0, 1, 1.0),
    (0, -1, 1.0),
    (1, 1, SQRT_2),
    (1, -1, SQRT_2),
    (-1, 1, SQRT_2),
    (-1, -1, SQRT_2),
];

/// Weighted A* searcher with buffers reused across queries.
///
/// The open heap, score table, and parent links are sized to the map once
/// and regenerated by [`reset`](GridPathfinder::reset) between queries.
/// Diagonal moves never cut corners: both orthogonally adjacent cells must
/// be free.
///
/// # Examples
///
/// ```
/// use grid_tour::models::{GridMap, GridPos};
/// use grid_tour::pathfinding::{AStarConfig, AStarSearcher, GridPathfinder};
///
/// let map = GridMap::open(5, 5);
/// let mut searcher = AStarSearcher::new(&map, AStarConfig::default().with_heuristic_weight(1.0));
/// let outcome = searcher.search(GridPos::new(0, 0), GridPos::new(4, 0));
/// assert_eq!(outcome.path.len(), 5);
/// assert!((outcome.cost - 4.0).abs() < 1e-10);
/// searcher.reset();
/// ```
pub struct AStarSearcher<'a> {
    map: &'a GridMap,
    config: AStarConfig,
    open: BinaryHeap<OpenNode>,
    g_score: Vec<f64>,
    parent: Vec<u32>,
    closed: Vec<bool>,
    dirty: bool,
}

impl<'a> AStarSearcher<'a> {
    /// Creates a searcher over the given map.
    pub fn new(map: &'a GridMap, config: AStarConfig) -> Self {
        let size = map.width() * map.height();
        Self {
            map,
            config,
            open: BinaryHeap::new(),
            g_score: vec![f64::INFINITY; size],
            parent: vec![NO_PARENT; size],
            closed: vec![false; size],
            dirty: false,
        }
    }

    fn pos_of(&self, index: u32) -> GridPos {
        let w = self.map.width();
        GridPos::new((index as usize % w) as i32, (index as usize / w) as i32)
    }

    /// Walks the parent chain back from `goal_idx` into a start-to-goal path.
    fn assemble_path(&self, goal_idx: u32) -> Vec<GridPos> {
        let mut path = Vec::new();
        let mut at = goal_idx;
        loop {
            path.push(self.pos_of(at));
            let up = self.parent[at as usize];
            if up == NO_PARENT {
                break;
            }
            at = up;
        }
        path.reverse();
        path
    }

    /// Returns `true` if the move `(dx, dy)` from `from` is traversable,
    /// including the no-corner-cutting rule for diagonals.
    fn can_step(&self, from: GridPos, dx: i32, dy: i32) -> bool {
        let to = GridPos::new(from.x + dx, from.y + dy);
        if !self.map.is_free(to) {
            return false;
        }
        if dx != 0 && dy != 0 {
            return self.map.is_free(GridPos::new(from.x + dx, from.y))
                && self.map.is_free(GridPos::new(from.x, from.y + dy));
        }
        true
    }
}

impl GridPathfinder for AStarSearcher<'_> {
    /// Searches a path from `start` to `goal`.
    ///
    /// # Panics
    ///
    /// Panics if called again without an intervening
    /// [`reset`](GridPathfinder::reset): the search structures are
    /// single-query state.
    fn search(&mut self, start: GridPos, goal: GridPos) -> SearchOutcome {
        assert!(
            !self.dirty,
            "search structures not regenerated; call reset() between queries"
        );
        self.dirty = true;

        if !self.map.is_free(start) || !self.map.is_free(goal) {
            return SearchOutcome::infeasible();
        }
        if start == goal {
            return SearchOutcome {
                path: vec![start],
                cost: 0.0,
            };
        }

        let weight = self.config.heuristic_weight;
        let start_idx = self.map.index_of(start) as u32;
        let goal_idx = self.map.index_of(goal) as u32;

        self.g_score[start_idx as usize] = 0.0;
        self.open.push(OpenNode {
            f: weight * start.octile_distance(goal),
            index: start_idx,
        });

        while let Some(node) = self.open.pop() {
            let idx = node.index as usize;
            if self.closed[idx] {
                continue;
            }
            self.closed[idx] = true;

            if node.index == goal_idx {
                return SearchOutcome {
                    path: self.assemble_path(goal_idx),
                    cost: self.g_score[idx],
                };
            }

            let here = self.pos_of(node.index);
            let g_here = self.g_score[idx];

            for &(dx, dy, step) in &MOVES {
                if !self.can_step(here, dx, dy) {
                    continue;
                }
                let next = GridPos::new(here.x + dx, here.y + dy);
                let next_idx = self.map.index_of(next);
                if self.closed[next_idx] {
                    continue;
                }
                let tentative = g_here + step;
                if tentative < self.g_score[next_idx] {
                    self.g_score[next_idx] = tentative;
                    self.parent[next_idx] = node.index;
                    self.open.push(OpenNode {
                        f: tentative + weight * next.octile_distance(goal),
                        index: next_idx as u32,
                    });
                }
            }
        }

        SearchOutcome::infeasible()
    }

    fn reset(&mut self) {
        self.open.clear();
        self.g_score.fill(f64::INFINITY);
        self.parent.fill(NO_PARENT);
        self.closed.fill(false);
        self.dirty = false;
    }
}
