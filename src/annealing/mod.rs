//! Tour optimization over the distance matrix.
//!
//! A population of candidate tours evolves by swap mutation under a
//! simulated-annealing acceptance rule: improving candidates are always
//! kept, worsening ones survive with probability `exp(-delta / T)`, and
//! the temperature decays geometrically each generation. The search stops
//! when the temperature reaches its floor or the generation cap is hit.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::{tour_cost, Tour};
