//! # grid-tour
//!
//! Single-agent target visitation on occupancy grids: pairwise A* routing,
//! a symmetric distance matrix with an infeasibility sentinel, and a
//! population-based annealing search over visiting permutations.
//!
//! ## Modules
//!
//! - [`models`] — Grid map, positions, path segments, and the tour plan output
//! - [`pairing`] — Bijection between unordered node pairs and linear slots
//! - [`pathfinding`] — Weighted A* search over the 8-connected grid
//! - [`distance`] — Distance matrix and the pairwise matrix builder
//! - [`annealing`] — Tour optimization with simulated-annealing acceptance
//! - [`route`] — Reconstruction of the winning tour into concrete segments
//! - [`solver`] — Input validation and the end-to-end [`solve`](solver::solve) entry point

pub mod annealing;
pub mod distance;
pub mod error;
pub mod models;
pub mod pairing;
pub mod pathfinding;
pub mod route;
pub mod solver;
