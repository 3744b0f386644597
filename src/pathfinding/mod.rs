//! Shortest-path search over the occupancy grid.
//!
//! The distance matrix builder talks to the pathfinder through the
//! [`GridPathfinder`] trait. Implementations are stateful across queries:
//! after every `search`, the caller must invoke [`reset`](GridPathfinder::reset)
//! before issuing the next query, regardless of the outcome. The bundled
//! [`AStarSearcher`] enforces this contract.

mod astar;

pub use astar::{AStarConfig, AStarSearcher};

use crate::models::GridPos;

/// Result of one pairwise shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Waypoints from start to goal. Empty when no path exists; a single
    /// point when start equals goal.
    pub path: Vec<GridPos>,

    /// Total path cost. Zero when the path is empty or degenerate.
    pub cost: f64,
}

impl SearchOutcome {
    /// The outcome of an infeasible query.
    pub fn infeasible() -> Self {
        Self {
            path: Vec::new(),
            cost: 0.0,
        }
    }
}

/// A stateful pairwise shortest-path collaborator.
///
/// No two queries may run concurrently against one instance, and the
/// internal search structures must be regenerated between queries by
/// calling [`reset`](Self::reset).
pub trait GridPathfinder {
    /// Searches a path from `start` to `goal`.
    fn search(&mut self, start: GridPos, goal: GridPos) -> SearchOutcome;

    /// Regenerates the internal search structures for the next query.
    fn reset(&mut self);
}
