//! End-to-end tour solving.
//!
//! Wires the pipeline together: validate inputs, route every node pair
//! into the distance matrix, run the annealing search, and map the
//! winning permutation back onto concrete path segments.

use log::debug;

use crate::annealing::{AnnealConfig, AnnealRunner};
use crate::distance::MatrixBuilder;
use crate::error::SolverError;
use crate::models::{GridMap, GridPos, TourPlan};
use crate::pathfinding::{AStarConfig, AStarSearcher, GridPathfinder};
use crate::route::reconstruct;

/// Solves the visitation problem with the bundled A* searcher.
///
/// The agent starts at `agent` and must visit every position in
/// `targets`, in whatever order minimizes total travel cost; it does not
/// return to its start. Positions on obstacle cells are not rejected:
/// their pairs simply come out infeasible and carry the sentinel cost.
///
/// # Errors
///
/// Returns [`SolverError`] when the configuration is invalid or any
/// position lies outside the map. No search is started in that case.
///
/// # Examples
///
/// ```
/// use grid_tour::annealing::AnnealConfig;
/// use grid_tour::models::{GridMap, GridPos};
/// use grid_tour::solver::solve;
///
/// let map = GridMap::open(8, 8);
/// let targets = [GridPos::new(6, 6), GridPos::new(0, 7)];
/// let config = AnnealConfig::default().with_seed(42);
///
/// let plan = solve(GridPos::new(0, 0), &targets, &map, &config).unwrap();
/// assert_eq!(plan.num_legs(), 2);
/// assert!(plan.total_cost.is_finite());
/// ```
pub fn solve(
    agent: GridPos,
    targets: &[GridPos],
    map: &GridMap,
    config: &AnnealConfig,
) -> Result<TourPlan, SolverError> {
    let mut searcher = AStarSearcher::new(map, AStarConfig::default());
    solve_with_pathfinder(agent, targets, map, &mut searcher, config)
}

/// Solves the visitation problem with a caller-supplied pathfinder.
///
/// The pathfinder is queried once per unordered node pair and reset
/// between queries, per the [`GridPathfinder`] contract.
pub fn solve_with_pathfinder<P: GridPathfinder>(
    agent: GridPos,
    targets: &[GridPos],
    map: &GridMap,
    pathfinder: &mut P,
    config: &AnnealConfig,
) -> Result<TourPlan, SolverError> {
    config.validate().map_err(SolverError::InvalidConfig)?;
    if !map.in_bounds(agent) {
        return Err(SolverError::InvalidInput(format!(
            "agent position {agent:?} lies outside the {}x{} map",
            map.width(),
            map.height()
        )));
    }
    for (idx, target) in targets.iter().enumerate() {
        if !map.in_bounds(*target) {
            return Err(SolverError::InvalidInput(format!(
                "target {idx} at {target:?} lies outside the {}x{} map",
                map.width(),
                map.height()
            )));
        }
    }

    let builder = MatrixBuilder::new().with_infeasible_cost(config.infeasible_cost);
    let (matrix, segments) = builder.build(agent, targets, pathfinder);

    let result = AnnealRunner::run(&matrix, config);
    debug!(
        "search finished after {} generations, best fitness {}",
        result.generations, result.best_fitness
    );

    let (legs, target_order) = reconstruct(result.best.nodes(), matrix.size(), &segments);
    Ok(TourPlan {
        segments: legs,
        target_order,
        total_cost: result.best_fitness,
    })
}

/// Solves from flat buffers, mirroring embedding-layer call shapes.
///
/// `agent_xy` is `[x, y]`; `targets_xy` holds `x0, y0, x1, y1, ...`;
/// `cells` is the row-major occupancy grid of `width * height` bytes
/// (`0` free, anything else an obstacle).
///
/// # Errors
///
/// Returns [`SolverError`] when a buffer length is inconsistent, in
/// addition to the [`solve`] preconditions.
pub fn solve_flat(
    agent_xy: &[i32],
    targets_xy: &[i32],
    cells: &[u8],
    width: usize,
    height: usize,
    config: &AnnealConfig,
) -> Result<TourPlan, SolverError> {
    if agent_xy.len() != 2 {
        return Err(SolverError::InvalidInput(format!(
            "agent buffer must hold exactly [x, y], got {} values",
            agent_xy.len()
        )));
    }
    if targets_xy.len() % 2 != 0 {
        return Err(SolverError::InvalidInput(format!(
            "targets buffer length must be even, got {}",
            targets_xy.len()
        )));
    }
    let map = GridMap::new(width, height, cells.to_vec()).ok_or_else(|| {
        SolverError::InvalidMap(format!(
            "cell buffer holds {} bytes, expected width * height = {}",
            cells.len(),
            width * height
        ))
    })?;

    let agent = GridPos::new(agent_xy[0], agent_xy[1]);
    let targets: Vec<GridPos> = targets_xy
        .chunks(2)
        .map(|xy| GridPos::new(xy[0], xy[1]))
        .collect();

    solve(agent, &targets, &map, config)
}
