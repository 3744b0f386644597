//! Distance matrix assembly from pairwise pathfinder queries.

use log::{debug, trace};

use super::{DistanceMatrix, INFEASIBLE_COST};
use crate::models::{GridPos, PathSegment};
use crate::pairing::{pair_count, pairs, slot_of};
use crate::pathfinding::GridPathfinder;

/// Builds the symmetric cost table and the parallel path segment store.
///
/// Node `0` is the agent's position; node `k > 0` is the `(k-1)`-th target.
/// Every unordered pair is routed exactly once, in slot order, and the
/// resulting segment is stored under its pair slot in query direction
/// (lower node id to higher node id). The pathfinder is reset after every
/// query, regardless of outcome.
///
/// Each query is classified one of three ways:
///
/// - **degenerate** (start equals goal): cost `0`, two-point segment;
/// - **feasible** (more than one waypoint): reported cost, path verbatim;
/// - **infeasible** (no path): sentinel cost, empty segment.
///
/// # Examples
///
/// ```
/// use grid_tour::distance::MatrixBuilder;
/// use grid_tour::models::{GridMap, GridPos};
/// use grid_tour::pathfinding::{AStarConfig, AStarSearcher};
///
/// let map = GridMap::open(4, 4);
/// let mut searcher = AStarSearcher::new(&map, AStarConfig::default().with_heuristic_weight(1.0));
/// let targets = [GridPos::new(3, 0), GridPos::new(0, 3)];
/// let (matrix, segments) = MatrixBuilder::new().build(GridPos::new(0, 0), &targets, &mut searcher);
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(segments.len(), 3);
/// assert!((matrix.get(0, 1) - 3.0).abs() < 1e-10);
/// assert!(matrix.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    infeasible_cost: f64,
}

impl Default for MatrixBuilder {
    fn default() -> Self {
        Self {
            infeasible_cost: INFEASIBLE_COST,
        }
    }
}

impl MatrixBuilder {
    /// Creates a builder with the default sentinel cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the sentinel cost recorded for infeasible pairs.
    ///
    /// Must match the `infeasible_cost` the optimizer is configured with.
    pub fn with_infeasible_cost(mut self, cost: f64) -> Self {
        self.infeasible_cost = cost;
        self
    }

    /// Routes every node pair and fills the cost table.
    ///
    /// Returns the matrix and the segment store indexed by pair slot.
    pub fn build<P: GridPathfinder>(
        &self,
        agent: GridPos,
        targets: &[GridPos],
        pathfinder: &mut P,
    ) -> (DistanceMatrix, Vec<PathSegment>) {
        let n = targets.len() + 1;
        let mut matrix = DistanceMatrix::new(n);
        let mut segments = Vec::with_capacity(pair_count(n));

        let position_of = |node: usize| -> GridPos {
            if node == 0 {
                agent
            } else {
                targets[node - 1]
            }
        };

        for (i, j) in pairs(n) {
            let start = position_of(i);
            let goal = position_of(j);
            let outcome = pathfinder.search(start, goal);
            pathfinder.reset();

            let slot = slot_of(n, i, j);
            debug_assert_eq!(slot, segments.len());

            let segment = if outcome.path.len() > 1 {
                matrix.set_symmetric(i, j, outcome.cost);
                PathSegment::new(outcome.path)
            } else if outcome.path.len() == 1 {
                matrix.set_symmetric(i, j, 0.0);
                PathSegment::degenerate(start)
            } else {
                matrix.set_symmetric(i, j, self.infeasible_cost);
                PathSegment::infeasible()
            };

            trace!(
                "pair ({i}, {j}) slot {slot}: cost {} ({} waypoints)",
                matrix.get(i, j),
                segment.len()
            );
            segments.push(segment);
        }

        debug!(
            "distance matrix built: {n} nodes, {} pairs",
            segments.len()
        );
        (matrix, segments)
    }
}
