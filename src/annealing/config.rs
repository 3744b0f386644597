//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::distance::INFEASIBLE_COST;

/// Configuration for the annealing tour search.
///
/// # Examples
///
/// ```
/// use grid_tour::annealing::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_population_size(50)
///     .with_max_generations(30)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealConfig {
    /// Number of tours in the population.
    pub population_size: usize,

    /// Hard cap on generations, guaranteeing termination under any
    /// cooling setting.
    pub max_generations: usize,

    /// Starting temperature.
    pub initial_temperature: f64,

    /// The search stops once the temperature falls to this floor.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied once per generation.
    pub cooling_factor: f64,

    /// Cap on mutation attempts per individual per generation. When no
    /// candidate is accepted within the cap, the best candidate seen is
    /// taken instead.
    pub mutation_retry_limit: usize,

    /// Cost at or above which an edge (and any tour using it) counts as
    /// infeasible. Must match the sentinel the distance matrix was built
    /// with.
    pub infeasible_cost: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            initial_temperature: 100.0,
            min_temperature: 5.0,
            cooling_factor: 0.9,
            mutation_retry_limit: 100,
            infeasible_cost: INFEASIBLE_COST,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_mutation_retry_limit(mut self, limit: usize) -> Self {
        self.mutation_retry_limit = limit;
        self
    }

    pub fn with_infeasible_cost(mut self, cost: f64) -> Self {
        self.infeasible_cost = cost;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be >= 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be >= 1".into());
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.mutation_retry_limit == 0 {
            return Err("mutation_retry_limit must be >= 1".into());
        }
        if !self.infeasible_cost.is_finite() || self.infeasible_cost <= 0.0 {
            return Err("infeasible_cost must be positive and finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.population_size, 50);
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 5.0).abs() < 1e-10);
        assert!((config.cooling_factor - 0.9).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        assert!(AnnealConfig::default()
            .with_population_size(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(AnnealConfig::default()
            .with_max_generations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_temperatures() {
        assert!(AnnealConfig::default()
            .with_initial_temperature(-1.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_min_temperature(0.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_cooling_factor() {
        assert!(AnnealConfig::default()
            .with_cooling_factor(1.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_cooling_factor(0.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_cooling_factor(0.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_retry_limit() {
        assert!(AnnealConfig::default()
            .with_mutation_retry_limit(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_infeasible_cost() {
        assert!(AnnealConfig::default()
            .with_infeasible_cost(f64::INFINITY)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_infeasible_cost(-5.0)
            .validate()
            .is_err());
    }
}
