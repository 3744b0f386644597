//! Annealing search loop.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::types::{tour_cost, Tour};
use crate::distance::DistanceMatrix;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Fitness of the best tour (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Best fitness seen so far, recorded at initialization and after each
    /// generation. Non-increasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the annealing tour search.
///
/// # Usage
///
/// ```
/// use grid_tour::annealing::{AnnealConfig, AnnealRunner};
/// use grid_tour::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_symmetric(0, 1, 1.0);
/// dm.set_symmetric(0, 2, 4.0);
/// dm.set_symmetric(1, 2, 2.0);
///
/// let config = AnnealConfig::default().with_seed(7);
/// let result = AnnealRunner::run(&dm, &config);
/// assert_eq!(result.best.nodes()[0], 0);
/// assert_eq!(result.best_fitness, 3.0);
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search over the given cost matrix.
    ///
    /// The matrix size is the node count; node `0` is the fixed start.
    /// With fewer than three nodes there is exactly one possible tour and
    /// the search short-circuits to it.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`AnnealConfig::validate`] first for a descriptive error) or the
    /// matrix is empty.
    pub fn run(matrix: &DistanceMatrix, config: &AnnealConfig) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");
        let n = matrix.size();
        assert!(n >= 1, "matrix must contain at least the agent node");

        if n <= 2 {
            let mut tour = Tour::new((0..n).collect());
            let fitness = tour_cost(tour.nodes(), matrix, config.infeasible_cost);
            tour.set_fitness(fitness);
            return AnnealResult {
                best: tour,
                best_fitness: fitness,
                generations: 0,
                final_temperature: config.initial_temperature,
                fitness_history: vec![fitness],
            };
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| {
                let mut tour = random_tour(n, &mut rng);
                let fitness = tour_cost(tour.nodes(), matrix, config.infeasible_cost);
                tour.set_fitness(fitness);
                tour
            })
            .collect();
        sort_by_fitness(&mut population);

        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let mut temperature = config.initial_temperature;
        let mut generations = 0;

        while temperature > config.min_temperature && generations < config.max_generations {
            let mut next: Vec<Tour> = Vec::with_capacity(population.len());
            for parent in &population {
                next.push(anneal_step(parent, matrix, config, temperature, &mut rng));
            }

            temperature *= config.cooling_factor;
            sort_by_fitness(&mut next);
            population = next;
            generations += 1;

            if population[0].fitness() < best.fitness() {
                best = population[0].clone();
            }
            fitness_history.push(best.fitness());

            debug!(
                "generation {generations}: temperature {temperature:.3}, best fitness {}",
                best.fitness()
            );
        }

        AnnealResult {
            best_fitness: best.fitness(),
            best,
            generations,
            final_temperature: temperature,
            fitness_history,
        }
    }
}

/// Produces the replacement for one individual.
///
/// Mutates until a candidate is accepted: improvements unconditionally,
/// worsenings with Metropolis probability `exp(-delta / T)`. Attempts are
/// capped by `mutation_retry_limit`; on exhaustion the best candidate seen
/// is taken, so the step terminates even when the acceptance probability
/// underflows at low temperature.
fn anneal_step<R: Rng>(
    parent: &Tour,
    matrix: &DistanceMatrix,
    config: &AnnealConfig,
    temperature: f64,
    rng: &mut R,
) -> Tour {
    let mut best_seen: Option<Tour> = None;

    for _ in 0..config.mutation_retry_limit {
        let candidate = mutated(parent, matrix, config.infeasible_cost, rng);

        if candidate.fitness() <= parent.fitness() {
            return candidate;
        }

        let probability = (-(candidate.fitness() - parent.fitness()) / temperature).exp();
        if rng.random_range(0.0..1.0) < probability {
            return candidate;
        }

        if best_seen
            .as_ref()
            .is_none_or(|b| candidate.fitness() < b.fitness())
        {
            best_seen = Some(candidate);
        }
    }

    best_seen.unwrap_or_else(|| parent.clone())
}

/// Swaps two distinct positions in the mutable range (everything after the
/// fixed start node) and re-evaluates.
fn mutated<R: Rng>(
    parent: &Tour,
    matrix: &DistanceMatrix,
    infeasible_cost: f64,
    rng: &mut R,
) -> Tour {
    let mut tour = parent.clone();
    let n = tour.len();

    let a = rng.random_range(1..n);
    let mut b = rng.random_range(1..n - 1);
    if b >= a {
        b += 1;
    }
    tour.nodes_mut().swap(a, b);

    let fitness = tour_cost(tour.nodes(), matrix, infeasible_cost);
    tour.set_fitness(fitness);
    tour
}

/// A uniformly random tour with node 0 fixed first.
fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut nodes: Vec<usize> = (0..n).collect();

    // Fisher-Yates shuffle over the mutable range
    for i in (2..n).rev() {
        let j = rng.random_range(1..=i);
        nodes.swap(i, j);
    }

    Tour::new(nodes)
}

fn sort_by_fitness(population: &mut [Tour]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
