//! Budget engine - pure functions over a point set and the piece catalog
//!
//! All point arithmetic is done in f64 rounded to 2 decimals, with a
//! small tolerance to absorb floating-point noise. The readiness gate
//! (`validate_ready`) is the single place that decides whether a point
//! set can be drafted with.

use crate::error::DraftError;
use crate::value_objects::{Piece, PointSet};

/// Tolerance absorbing floating-point rounding noise in budget math
pub const EPSILON: f64 = 0.001;

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total points assigned across all pieces, rounded to 2 decimals
pub fn spent(set: &PointSet) -> f64 {
    round2(set.costs.values().sum())
}

/// Budget left to allocate: `total_points` minus the cost sum. Negative
/// when over budget.
pub fn remaining(set: &PointSet) -> f64 {
    round2(set.total_points - set.costs.values().sum::<f64>())
}

/// Whether assigned costs exceed the budget total
pub fn is_over_budget(set: &PointSet) -> bool {
    remaining(set) < -EPSILON
}

/// Policy hook: does this piece need a cost above zero before the set is
/// usable? Currently every piece does; exemptions (e.g. a free king)
/// would change only this predicate.
pub fn requires_positive_cost(_piece: &Piece) -> bool {
    true
}

/// Catalog pieces that still need a positive cost in this set
pub fn unpriced_pieces<'a>(set: &PointSet, catalog: &'a [Piece]) -> Vec<&'a Piece> {
    catalog
        .iter()
        .filter(|piece| requires_positive_cost(piece) && set.cost(&piece.id) <= 0.0)
        .collect()
}

/// A set is complete when the remaining budget is (within tolerance)
/// zero and every piece that needs a positive cost has one. An empty
/// catalog is vacuously priced, so completeness then reduces to a zero
/// balance.
pub fn is_complete(set: &PointSet, catalog: &[Piece]) -> bool {
    remaining(set).abs() <= EPSILON && unpriced_pieces(set, catalog).is_empty()
}

/// The drafting gate: explains the first unmet condition, checked in
/// order of severity (over budget, unpriced pieces, leftover points).
pub fn validate_ready(set: &PointSet, catalog: &[Piece]) -> Result<(), DraftError> {
    let left = remaining(set);
    if left < -EPSILON {
        return Err(DraftError::OverBudget {
            over: format_points(-left),
        });
    }

    let unpriced = unpriced_pieces(set, catalog);
    if !unpriced.is_empty() {
        return Err(DraftError::UnpricedPieces {
            count: unpriced.len(),
        });
    }

    if left > EPSILON {
        return Err(DraftError::PointsUnallocated {
            remaining: format_points(left),
        });
    }

    Ok(())
}

/// Display a point value with up to 2 decimals, trailing zeros stripped
/// ("3" not "3.00", "3.5" not "3.50").
pub fn format_points(value: f64) -> String {
    let rounded = round2(value);
    if rounded == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }

    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn piece(id: &str) -> Piece {
        Piece::from_raw(&json!({ "id": id, "name": id })).expect("valid piece")
    }

    fn catalog() -> Vec<Piece> {
        vec![piece("pawn"), piece("knight")]
    }

    fn set_with(total: f64, costs: &[(&str, &str)]) -> PointSet {
        let mut set = PointSet::with_total(total);
        for (id, cost) in costs {
            set.set_cost(id, cost);
        }
        set
    }

    #[test]
    fn test_remaining_is_total_minus_costs() {
        let set = set_with(4.0, &[("pawn", "1"), ("knight", "3")]);
        assert_eq!(remaining(&set), 0.0);
        assert_eq!(spent(&set), 4.0);

        let set = set_with(4.0, &[("pawn", "1.25")]);
        assert_eq!(remaining(&set), 2.75);
    }

    #[test]
    fn test_complete_when_balanced_and_all_priced() {
        let set = set_with(4.0, &[("pawn", "1"), ("knight", "3")]);
        assert!(is_complete(&set, &catalog()));
        assert!(validate_ready(&set, &catalog()).is_ok());
    }

    #[test]
    fn test_incomplete_when_piece_unpriced() {
        // knight unset: not complete even though only 1 point is spent
        let set = set_with(4.0, &[("pawn", "1")]);
        assert!(!is_complete(&set, &catalog()));
        let catalog = catalog();
        let unpriced = unpriced_pieces(&set, &catalog);
        assert_eq!(unpriced.len(), 1);
        assert_eq!(unpriced[0].id, "knight");
    }

    #[test]
    fn test_over_budget() {
        let set = set_with(4.0, &[("pawn", "1"), ("knight", "5")]);
        assert_eq!(remaining(&set), -2.0);
        assert!(is_over_budget(&set));
        assert_eq!(
            validate_ready(&set, &catalog()),
            Err(DraftError::OverBudget {
                over: "2".to_string()
            })
        );
    }

    #[test]
    fn test_gate_reports_unpriced_before_leftover() {
        let set = set_with(4.0, &[("pawn", "1")]);
        assert_eq!(
            validate_ready(&set, &catalog()),
            Err(DraftError::UnpricedPieces { count: 1 })
        );
    }

    #[test]
    fn test_gate_reports_leftover_points() {
        let set = set_with(5.0, &[("pawn", "1"), ("knight", "3")]);
        assert_eq!(
            validate_ready(&set, &catalog()),
            Err(DraftError::PointsUnallocated {
                remaining: "1".to_string()
            })
        );
    }

    #[test]
    fn test_empty_catalog_complete_only_at_zero_balance() {
        let zero = PointSet::with_total(0.0);
        assert!(is_complete(&zero, &[]));

        let unspent = PointSet::with_total(40.0);
        assert!(!is_complete(&unspent, &[]));
    }

    #[test]
    fn test_changing_total_keeps_costs() {
        let mut set = set_with(4.0, &[("pawn", "1"), ("knight", "3")]);
        set.total_points = 2.0;
        assert_eq!(remaining(&set), -2.0);
        assert!(is_over_budget(&set));
    }

    #[test]
    fn test_rounding_tolerance() {
        // 0.1 + 0.2 famously != 0.3 in f64; the tolerance hides it
        let set = set_with(0.3, &[("pawn", "0.1"), ("knight", "0.2")]);
        assert!(!is_over_budget(&set));
        assert!(is_complete(&set, &catalog()));
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(3.0), "3");
        assert_eq!(format_points(3.5), "3.5");
        assert_eq!(format_points(3.25), "3.25");
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(-0.0001), "0");
        assert_eq!(format_points(-2.5), "-2.5");
    }
}
