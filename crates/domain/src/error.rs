//! Unified error types for the domain layer
//!
//! The drafting flow has exactly one recoverable failure mode: the user
//! asks to proceed ("create army") while the selected point set does not
//! satisfy the readiness gate. Everything else in this crate degrades to
//! safe defaults instead of erroring.

use thiserror::Error;

/// Why a point set is not ready to draft with.
///
/// Surfaced to the user as a blocking notification; never fatal and never
/// accompanied by a state change.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DraftError {
    /// Assigned costs exceed the budget total
    #[error("Over budget by {over} points - remove {over} points before continuing")]
    OverBudget { over: String },

    /// Some catalog pieces still have no cost assigned
    #[error("{count} pieces still need a cost above zero")]
    UnpricedPieces { count: usize },

    /// Budget balances but not every point has been spent
    #[error("{remaining} points left to allocate")]
    PointsUnallocated { remaining: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_budget_message() {
        let err = DraftError::OverBudget {
            over: "2.5".to_string(),
        };
        assert!(err.to_string().contains("Over budget by 2.5 points"));
    }

    #[test]
    fn test_unpriced_pieces_message() {
        let err = DraftError::UnpricedPieces { count: 3 };
        assert_eq!(err.to_string(), "3 pieces still need a cost above zero");
    }

    #[test]
    fn test_points_unallocated_message() {
        let err = DraftError::PointsUnallocated {
            remaining: "1.25".to_string(),
        };
        assert_eq!(err.to_string(), "1.25 points left to allocate");
    }
}
