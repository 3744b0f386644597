//! Pairwise cost table and its construction.
//!
//! - [`DistanceMatrix`] — Dense symmetric n×n cost table
//! - [`MatrixBuilder`] — Fills the table (and the parallel path segment
//!   store) from one pathfinder query per unordered pair
//! - [`INFEASIBLE_COST`] — Sentinel cost marking unreachable pairs

mod builder;
mod matrix;

pub use builder::MatrixBuilder;
pub use matrix::DistanceMatrix;

/// Sentinel cost for a pair with no feasible path.
///
/// Strictly larger than any realistic tour cost on supported maps, yet
/// small enough that summing it across a full tour cannot overflow.
/// Callers with unusually expensive maps can inject their own value via
/// [`MatrixBuilder::with_infeasible_cost`] and
/// [`AnnealConfig::with_infeasible_cost`](crate::annealing::AnnealConfig::with_infeasible_cost).
pub const INFEASIBLE_COST: f64 = 1e8;
