//! Final tour plan returned by the solver.

use serde::{Deserialize, Serialize};

use super::PathSegment;

/// The solved visitation plan.
///
/// `segments[i]` is the concrete route of the `i`-th leg, already oriented
/// in travel direction: from the agent to `target_order[0]`, then from
/// `target_order[0]` to `target_order[1]`, and so on. `target_order` holds
/// zero-based indices into the target list the caller supplied.
///
/// `total_cost` is the fitness of the winning tour; it equals the
/// infeasibility sentinel when no feasible ordering was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPlan {
    /// One path segment per tour leg, in visiting order.
    pub segments: Vec<PathSegment>,

    /// Visiting order as indices into the supplied target list.
    pub target_order: Vec<usize>,

    /// Total cost of the winning tour.
    pub total_cost: f64,
}

impl TourPlan {
    /// Number of legs in the plan (equals the number of targets).
    pub fn num_legs(&self) -> usize {
        self.segments.len()
    }
}
