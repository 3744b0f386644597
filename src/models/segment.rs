//! Per-pair path segments.

use serde::{Deserialize, Serialize};

use super::GridPos;

/// One pairwise shortest path, stored in the direction it was queried.
///
/// An empty segment marks an infeasible pair. A degenerate pair (start
/// equals goal) is stored as the same point twice, so it stays
/// distinguishable from infeasibility.
///
/// # Examples
///
/// ```
/// use grid_tour::models::{GridPos, PathSegment};
///
/// let seg = PathSegment::new(vec![GridPos::new(0, 0), GridPos::new(1, 1)]);
/// let back = seg.reversed();
/// assert_eq!(back.points()[0], GridPos::new(1, 1));
/// assert_eq!(back.reversed(), seg);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    points: Vec<GridPos>,
}

impl PathSegment {
    /// Creates a segment from an ordered waypoint list.
    pub fn new(points: Vec<GridPos>) -> Self {
        Self { points }
    }

    /// The empty segment, marking an infeasible pair.
    pub fn infeasible() -> Self {
        Self { points: Vec::new() }
    }

    /// A degenerate segment: the point stored twice.
    pub fn degenerate(point: GridPos) -> Self {
        Self {
            points: vec![point, point],
        }
    }

    /// Ordered waypoints, first to last.
    pub fn points(&self) -> &[GridPos] {
        &self.points
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this segment marks an infeasible pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The segment traversed in the opposite direction.
    ///
    /// Waypoints keep their internal structure; only their order flips.
    /// Reversing twice yields the original segment.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(points: &[(i32, i32)]) -> PathSegment {
        PathSegment::new(points.iter().map(|&(x, y)| GridPos::new(x, y)).collect())
    }

    #[test]
    fn test_reversed_order() {
        let s = seg(&[(0, 0), (1, 0), (2, 1)]);
        let r = s.reversed();
        assert_eq!(
            r.points(),
            &[GridPos::new(2, 1), GridPos::new(1, 0), GridPos::new(0, 0)]
        );
    }

    #[test]
    fn test_reversed_is_involution() {
        let s = seg(&[(3, 4), (4, 4), (5, 5), (6, 5)]);
        assert_eq!(s.reversed().reversed(), s);
    }

    #[test]
    fn test_infeasible() {
        let s = PathSegment::infeasible();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.reversed(), s);
    }

    #[test]
    fn test_degenerate() {
        let s = PathSegment::degenerate(GridPos::new(2, 3));
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.points()[0], s.points()[1]);
        assert_eq!(s.reversed(), s);
    }
}
