//! Error types for the solver boundary.

use thiserror::Error;

/// Errors rejected synchronously before any search begins.
///
/// Infeasible routing is not an error: unreachable pairs are encoded in the
/// distance matrix as a sentinel cost and propagate arithmetically through
/// the search (see [`distance::INFEASIBLE_COST`](crate::distance::INFEASIBLE_COST)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Agent or target input violates a precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The occupancy grid is malformed.
    #[error("invalid map: {0}")]
    InvalidMap(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SolverError::InvalidInput("targets buffer length must be even".into());
        assert_eq!(
            e.to_string(),
            "invalid input: targets buffer length must be even"
        );

        let e = SolverError::InvalidConfig("population_size must be >= 1".into());
        assert!(e.to_string().starts_with("invalid configuration"));

        let e = SolverError::InvalidMap("cell buffer length mismatch".into());
        assert!(e.to_string().starts_with("invalid map"));
    }
}
