//! Point sets - user-created budget configurations
//!
//! A point set pairs a total budget with a sparse per-piece cost map.
//! Costs are stored rounded to 2 decimals and clamped to >= 0; a zero
//! cost is represented by omission, which the budget engine treats the
//! same as an explicit 0.

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::budget::round2;
use crate::value_objects::Ruleset;

/// Fallback label applied when a rename trims to nothing
pub const DEFAULT_POINT_SET_NAME: &str = "Point set";

/// Label given to freshly created point sets
pub const NEW_POINT_SET_NAME: &str = "New point set";

/// A named budget configuration owned by the draft session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    /// Opaque unique id, generated at creation
    pub id: String,
    /// User-editable label
    pub name: String,
    /// Points budget total
    #[serde(rename = "totalPoints")]
    pub total_points: f64,
    /// Sparse piece-id -> cost map; absent entries mean cost 0
    pub costs: BTreeMap<String, f64>,
    /// Unknown fields from persisted records, preserved across
    /// load/save round-trips for forward compatibility
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PointSet {
    /// Create a point set with defaults: "New point set" at the smallest
    /// allowed budget total.
    pub fn new() -> Self {
        Self::with_total(Ruleset::default_total())
    }

    /// Create a point set with the given budget total
    pub fn with_total(total_points: f64) -> Self {
        Self {
            id: fresh_id(),
            name: NEW_POINT_SET_NAME.to_string(),
            total_points,
            costs: BTreeMap::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Copy this point set under a fresh id, with " (copy)" appended to
    /// the name. Costs are copied by value, so edits to the copy never
    /// affect the original.
    pub fn duplicate(&self) -> Self {
        Self {
            id: fresh_id(),
            name: format!("{} (copy)", self.name),
            total_points: self.total_points,
            costs: self.costs.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Rename to the trimmed input, or to "Point set" when the trimmed
    /// input is empty.
    pub fn rename(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            DEFAULT_POINT_SET_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    /// Assign a cost from raw user input. Unparseable, negative, or
    /// non-finite input counts as 0; the stored value is rounded to
    /// 2 decimals, and a zero result removes the entry.
    pub fn set_cost(&mut self, piece_id: &str, raw_value: &str) {
        let parsed = raw_value.trim().parse::<f64>().unwrap_or(0.0);
        let cost = if parsed.is_finite() && parsed > 0.0 {
            round2(parsed)
        } else {
            0.0
        };

        if cost > 0.0 {
            self.costs.insert(piece_id.to_string(), cost);
        } else {
            self.costs.remove(piece_id);
        }
    }

    /// Cost assigned to a piece, 0 when absent
    pub fn cost(&self, piece_id: &str) -> f64 {
        self.costs.get(piece_id).copied().unwrap_or(0.0)
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_id() -> String {
    format!("ps-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let set = PointSet::new();
        assert!(set.id.starts_with("ps-"));
        assert_eq!(set.name, NEW_POINT_SET_NAME);
        assert_eq!(set.total_points, Ruleset::default_total());
        assert!(set.costs.is_empty());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = PointSet::with_total(80.0);
        original.rename("Cavalry rush");
        original.set_cost("knight", "3");

        let mut copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Cavalry rush (copy)");
        assert_eq!(copy.total_points, 80.0);
        assert_eq!(copy.cost("knight"), 3.0);

        copy.set_cost("knight", "5");
        assert_eq!(original.cost("knight"), 3.0);
    }

    #[test]
    fn test_rename_blank_falls_back() {
        let mut set = PointSet::new();
        set.rename("   ");
        assert_eq!(set.name, DEFAULT_POINT_SET_NAME);
        set.rename("  Siege line ");
        assert_eq!(set.name, "Siege line");
    }

    #[test]
    fn test_set_cost_rounds_and_clamps() {
        let mut set = PointSet::new();
        set.set_cost("pawn", "1.006");
        assert_eq!(set.cost("pawn"), 1.01);

        set.set_cost("pawn", "-3");
        assert_eq!(set.cost("pawn"), 0.0);
        assert!(!set.costs.contains_key("pawn"));

        set.set_cost("pawn", "not a number");
        assert_eq!(set.cost("pawn"), 0.0);

        set.set_cost("pawn", "inf");
        assert_eq!(set.cost("pawn"), 0.0);
    }

    #[test]
    fn test_zero_cost_stored_as_omission() {
        let mut set = PointSet::new();
        set.set_cost("pawn", "2");
        set.set_cost("pawn", "0");
        assert!(set.costs.is_empty());
    }

    #[test]
    fn test_serializes_with_extra_fields() {
        let mut set = PointSet::with_total(40.0);
        set.extra
            .insert("favorite".to_string(), serde_json::Value::Bool(true));

        let value = serde_json::to_value(&set).expect("serializable");
        assert_eq!(value["totalPoints"], 40.0);
        assert_eq!(value["favorite"], true);
    }
}
