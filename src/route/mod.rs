//! Reconstruction of a winning tour into concrete geometry.
//!
//! The optimizer works purely on the cost matrix; this module maps its
//! result back onto the per-pair path segments stored by the matrix
//! builder, using the same pair-slot addressing.

mod reconstruct;

pub use reconstruct::reconstruct;
