//! Pair ↔ slot arithmetic.

/// Number of unordered pairs among `n` nodes: `C(n, 2)`.
///
/// Zero for `n < 2`.
pub fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Linear slot of the unordered pair `{i, j}` among `n` nodes.
///
/// Pairs are ranked row-major: all pairs whose smaller element is `0`
/// first (by ascending larger element), then smaller element `1`, and so
/// on. The slot is the triangular-number offset of the row plus the
/// position of the larger element within it. The argument order does not
/// matter.
///
/// # Panics
///
/// Panics if `i == j` or either id is `>= n`.
///
/// # Examples
///
/// ```
/// use grid_tour::pairing::slot_of;
///
/// assert_eq!(slot_of(5, 0, 1), 0);
/// assert_eq!(slot_of(5, 0, 4), 3);
/// assert_eq!(slot_of(5, 1, 2), 4);
/// assert_eq!(slot_of(5, 2, 1), 4);
/// assert_eq!(slot_of(5, 3, 4), 9);
/// ```
pub fn slot_of(n: usize, i: usize, j: usize) -> usize {
    assert!(i != j, "a pair needs two distinct node ids, got {i} twice");
    assert!(i < n && j < n, "node ids ({i}, {j}) out of range for n={n}");
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    // Rows 0..lo contribute (n-1) + (n-2) + ... + (n-lo) slots.
    let row_start = lo * n - lo * (lo + 1) / 2;
    row_start + (hi - lo - 1)
}

/// Inverse of [`slot_of`]: recovers `(i, j)` with `i < j` from a slot.
///
/// Exact for every valid slot; the two functions are recomputed
/// independently during matrix construction and route reconstruction and
/// must agree.
///
/// # Panics
///
/// Panics if `slot >= pair_count(n)`.
///
/// # Examples
///
/// ```
/// use grid_tour::pairing::{pair_of, slot_of};
///
/// assert_eq!(pair_of(5, 0), (0, 1));
/// assert_eq!(pair_of(5, 4), (1, 2));
/// assert_eq!(pair_of(5, 9), (3, 4));
/// assert_eq!(slot_of(5, 3, 4), 9);
/// ```
pub fn pair_of(n: usize, slot: usize) -> (usize, usize) {
    assert!(
        slot < pair_count(n),
        "slot {slot} out of range for n={n} ({} pairs)",
        pair_count(n)
    );
    let mut i = 0;
    let mut row_start = 0;
    loop {
        let row_len = n - i - 1;
        if slot < row_start + row_len {
            return (i, slot - row_start + i + 1);
        }
        row_start += row_len;
        i += 1;
    }
}

/// Iterates every unordered pair `(i, j)`, `i < j`, in slot order.
///
/// # Examples
///
/// ```
/// use grid_tour::pairing::pairs;
///
/// let all: Vec<_> = pairs(4).collect();
/// assert_eq!(all, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
/// assert!(pairs(1).next().is_none());
/// ```
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(10), 45);
    }

    #[test]
    fn test_slot_of_row_major() {
        // n = 4: (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
        assert_eq!(slot_of(4, 0, 1), 0);
        assert_eq!(slot_of(4, 0, 2), 1);
        assert_eq!(slot_of(4, 0, 3), 2);
        assert_eq!(slot_of(4, 1, 2), 3);
        assert_eq!(slot_of(4, 1, 3), 4);
        assert_eq!(slot_of(4, 2, 3), 5);
    }

    #[test]
    fn test_slot_of_direction_agnostic() {
        for (i, j) in pairs(7) {
            assert_eq!(slot_of(7, i, j), slot_of(7, j, i));
        }
    }

    #[test]
    fn test_pairs_matches_slots() {
        for n in 2..12 {
            for (slot, (i, j)) in pairs(n).enumerate() {
                assert_eq!(slot_of(n, i, j), slot);
                assert_eq!(pair_of(n, slot), (i, j));
            }
        }
    }

    #[test]
    fn test_two_nodes_single_pair() {
        assert_eq!(pair_count(2), 1);
        assert_eq!(slot_of(2, 0, 1), 0);
        assert_eq!(pair_of(2, 0), (0, 1));
    }

    #[test]
    #[should_panic(expected = "distinct node ids")]
    fn test_slot_of_rejects_equal_ids() {
        slot_of(5, 3, 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_of_rejects_large_id() {
        slot_of(5, 0, 5);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_pair_of_rejects_large_slot() {
        pair_of(5, 10);
    }

    proptest! {
        #[test]
        fn prop_slot_roundtrip(n in 2usize..80, seed in 0usize..10_000) {
            let slot = seed % pair_count(n);
            let (i, j) = pair_of(n, slot);
            prop_assert!(i < j && j < n);
            prop_assert_eq!(slot_of(n, i, j), slot);
        }

        #[test]
        fn prop_pair_roundtrip(n in 2usize..80, a in 0usize..80, b in 0usize..80) {
            let i = a % n;
            let j = b % n;
            prop_assume!(i != j);
            let slot = slot_of(n, i, j);
            prop_assert!(slot < pair_count(n));
            prop_assert_eq!(pair_of(n, slot), (i.min(j), i.max(j)));
        }
    }
}
