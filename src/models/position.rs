//! Grid cell position.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the occupancy grid.
///
/// `x` is the column, `y` the row. Negative coordinates are representable so
/// that out-of-bounds inputs can be rejected rather than wrapped.
///
/// # Examples
///
/// ```
/// use grid_tour::models::GridPos;
///
/// let a = GridPos::new(0, 0);
/// let b = GridPos::new(3, 4);
/// assert_eq!(a.chebyshev_distance(b), 4);
/// assert!((a.octile_distance(b) - (4.0 + 3.0 * (std::f64::consts::SQRT_2 - 1.0))).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Creates a position from column and row.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: number of 8-connected steps between two cells.
    pub fn chebyshev_distance(self, other: GridPos) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx.max(dy)
    }

    /// Octile distance: length of the shortest 8-connected path on an
    /// obstacle-free grid, with unit straight moves and `sqrt(2)` diagonals.
    pub fn octile_distance(self, other: GridPos) -> f64 {
        let dx = (self.x - other.x).abs() as f64;
        let dy = (self.y - other.y).abs() as f64;
        dx.max(dy) + (std::f64::consts::SQRT_2 - 1.0) * dx.min(dy)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
