//! Tour-to-segment mapping.

use crate::models::PathSegment;
use crate::pairing::slot_of;

/// Maps a tour onto its stored path segments.
///
/// For each consecutive pair `(a, b)` of the tour, fetches the segment at
/// `slot_of(n, a, b)`. Segments are stored from the lower to the higher
/// node id; when the tour traverses a leg high-to-low, the segment is
/// reversed before use. Empty segments (infeasible pairs) pass through
/// unchanged — they should not appear in a winning tour, but they must
/// not break reconstruction.
///
/// Returns the oriented segments and the visited target indices (each
/// tour node minus one; the fixed start node is not a target).
///
/// # Panics
///
/// Panics if the tour references a node id `>= n` or the segment store is
/// smaller than the slots the tour addresses.
///
/// # Examples
///
/// ```
/// use grid_tour::models::{GridPos, PathSegment};
/// use grid_tour::route::reconstruct;
///
/// // Two nodes: agent and one target, one stored pair.
/// let segments = vec![PathSegment::new(vec![GridPos::new(0, 0), GridPos::new(1, 0)])];
/// let (legs, order) = reconstruct(&[0, 1], 2, &segments);
/// assert_eq!(order, vec![0]);
/// assert_eq!(legs[0].points()[0], GridPos::new(0, 0));
/// ```
pub fn reconstruct(
    tour: &[usize],
    num_nodes: usize,
    segments: &[PathSegment],
) -> (Vec<PathSegment>, Vec<usize>) {
    let mut legs = Vec::with_capacity(tour.len().saturating_sub(1));

    for leg in tour.windows(2) {
        let (a, b) = (leg[0], leg[1]);
        let stored = &segments[slot_of(num_nodes, a, b)];
        if a > b {
            legs.push(stored.reversed());
        } else {
            legs.push(stored.clone());
        }
    }

    let target_order = tour.iter().skip(1).map(|&node| node - 1).collect();
    (legs, target_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridPos;
    use crate::pairing::{pair_count, pair_of};

    /// Builds a synthetic segment store where the pair {i, j} gets the
    /// straight two-point segment (i, i) -> (j, j).
    fn synthetic_segments(n: usize) -> Vec<PathSegment> {
        (0..pair_count(n))
            .map(|slot| {
                let (i, j) = pair_of(n, slot);
                PathSegment::new(vec![
                    GridPos::new(i as i32, i as i32),
                    GridPos::new(j as i32, j as i32),
                ])
            })
            .collect()
    }

    #[test]
    fn test_forward_legs_kept_verbatim() {
        let segments = synthetic_segments(4);
        let (legs, order) = reconstruct(&[0, 1, 2, 3], 4, &segments);

        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0].points()[0], GridPos::new(0, 0));
        assert_eq!(legs[0].points()[1], GridPos::new(1, 1));
        assert_eq!(legs[2].points()[0], GridPos::new(2, 2));
        assert_eq!(legs[2].points()[1], GridPos::new(3, 3));
    }

    #[test]
    fn test_backward_legs_are_reversed() {
        let segments = synthetic_segments(4);
        let (legs, order) = reconstruct(&[0, 3, 1, 2], 4, &segments);

        assert_eq!(order, vec![2, 0, 1]);
        // Leg 3 -> 1 is stored as {1, 3}: (1,1) -> (3,3); traversal flips it.
        assert_eq!(legs[1].points()[0], GridPos::new(3, 3));
        assert_eq!(legs[1].points()[1], GridPos::new(1, 1));
        // Leg 1 -> 2 runs low-to-high and stays as stored.
        assert_eq!(legs[2].points()[0], GridPos::new(1, 1));
        assert_eq!(legs[2].points()[1], GridPos::new(2, 2));
    }

    #[test]
    fn test_legs_chain_head_to_tail() {
        let segments = synthetic_segments(5);
        let (legs, _) = reconstruct(&[0, 4, 2, 1, 3], 5, &segments);

        for pair in legs.windows(2) {
            assert_eq!(
                pair[0].points().last(),
                pair[1].points().first(),
                "consecutive legs must share an endpoint"
            );
        }
    }

    #[test]
    fn test_infeasible_segment_passes_through() {
        let mut segments = synthetic_segments(3);
        segments[2] = PathSegment::infeasible(); // pair {1, 2}

        let (legs, order) = reconstruct(&[0, 2, 1], 3, &segments);
        assert_eq!(order, vec![1, 0]);
        assert!(legs[1].is_empty());
    }

    #[test]
    fn test_single_node_tour_has_no_legs() {
        let (legs, order) = reconstruct(&[0], 1, &[]);
        assert!(legs.is_empty());
        assert!(order.is_empty());
    }
}
