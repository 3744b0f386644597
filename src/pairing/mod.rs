//! Canonical enumeration of unordered node pairs.
//!
//! The matrix builder and the route reconstructor never exchange pair
//! indices directly; both recompute them through this module. The bijection
//! between a pair `{i, j}` and its linear slot is therefore the addressing
//! contract that lets the optimizer work on a bare cost matrix while the
//! reconstructor can still recover the concrete geometry afterwards.

mod slots;

pub use slots::{pair_count, pair_of, pairs, slot_of};
