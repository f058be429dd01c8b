//! Persistence for point sets
//!
//! Point sets live under one namespaced key in the platform's key-value
//! storage, serialized as a JSON array. Loading is defensive: a missing
//! key, unparseable JSON, or a non-array payload all come back as an
//! empty list (indistinguishable from a first run), and each record is
//! reconstructed field by field with defaults for anything invalid.
//! Saving is best-effort and never surfaces an error.

use serde_json::Value;

use vanguard_domain::budget::round2;
use vanguard_domain::{PointSet, Ruleset, DEFAULT_POINT_SET_NAME};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Store for the persisted point-set list
#[derive(Clone)]
pub struct PointSetStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> PointSetStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load all persisted point sets. Never fails; missing state yields
    /// an empty list, and corrupt state is cleared from storage so the
    /// next run starts from a clean first-run slot.
    pub fn load(&self) -> Vec<PointSet> {
        let Some(raw) = self.storage.load(storage_keys::POINT_SETS) else {
            return Vec::new();
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Clearing unparseable point-set state: {e}");
                self.storage.remove(storage_keys::POINT_SETS);
                return Vec::new();
            }
        };

        match value.as_array() {
            Some(records) => records.iter().filter_map(decode_point_set).collect(),
            None => {
                tracing::warn!("Clearing non-array point-set state");
                self.storage.remove(storage_keys::POINT_SETS);
                Vec::new()
            }
        }
    }

    /// Serialize the full list back to storage. Best-effort: failures are
    /// swallowed, the in-memory session stays authoritative.
    pub fn save(&self, sets: &[PointSet]) {
        match serde_json::to_string(sets) {
            Ok(payload) => self.storage.save(storage_keys::POINT_SETS, &payload),
            Err(e) => tracing::warn!("Failed to serialize point sets: {e}"),
        }
    }
}

/// Reconstruct one persisted record, defaulting every invalid field:
/// missing/blank id is regenerated, missing name becomes "Point set",
/// missing/invalid total falls back to the smallest allowed budget, and
/// costs keep only finite positive numeric entries. Unknown fields are
/// preserved verbatim for the next save.
fn decode_point_set(value: &Value) -> Option<PointSet> {
    let obj = value.as_object()?;
    let mut set = PointSet::new();

    if let Some(id) = obj.get("id").and_then(Value::as_str) {
        if !id.trim().is_empty() {
            set.id = id.trim().to_string();
        }
    }

    set.name = obj
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_POINT_SET_NAME)
        .to_string();

    set.total_points = obj
        .get("totalPoints")
        .and_then(Value::as_f64)
        .filter(|total| total.is_finite() && *total > 0.0)
        .unwrap_or_else(Ruleset::default_total);

    set.costs.clear();
    if let Some(costs) = obj.get("costs").and_then(Value::as_object) {
        for (piece_id, cost) in costs {
            if let Some(cost) = cost.as_f64().filter(|c| c.is_finite() && *c > 0.0) {
                set.costs.insert(piece_id.clone(), round2(cost));
            }
        }
    }

    set.extra = obj
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "id" | "name" | "totalPoints" | "costs"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockStorageProvider;
    use serde_json::json;

    fn store() -> PointSetStore<MockStorageProvider> {
        PointSetStore::new(MockStorageProvider::default())
    }

    #[test]
    fn test_load_missing_key_is_first_run() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn test_load_recovers_from_corrupt_state() {
        let store = store();
        store.storage.save(storage_keys::POINT_SETS, "{not json");
        assert!(store.load().is_empty());

        store
            .storage
            .save(storage_keys::POINT_SETS, r#"{"a": 1}"#);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_clears_corrupt_state_from_storage() {
        let store = store();
        store.storage.save(storage_keys::POINT_SETS, "{not json");
        store.load();
        assert_eq!(store.storage.load(storage_keys::POINT_SETS), None);

        store
            .storage
            .save(storage_keys::POINT_SETS, r#"{"a": 1}"#);
        store.load();
        assert_eq!(store.storage.load(storage_keys::POINT_SETS), None);
    }

    #[test]
    fn test_round_trip_preserves_core_fields() {
        let store = store();
        let mut set = PointSet::with_total(80.0);
        set.rename("Cavalry");
        set.set_cost("knight", "3.5");

        store.save(&[set.clone()]);
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, set.id);
        assert_eq!(loaded[0].name, "Cavalry");
        assert_eq!(loaded[0].total_points, 80.0);
        assert_eq!(loaded[0].costs, set.costs);
    }

    #[test]
    fn test_round_trip_preserves_unknown_fields() {
        let store = store();
        store.storage.save(
            storage_keys::POINT_SETS,
            &json!([{
                "id": "ps-1",
                "name": "Keep me",
                "totalPoints": 40,
                "costs": {},
                "colorTheme": "crimson"
            }])
            .to_string(),
        );

        let loaded = store.load();
        assert_eq!(loaded[0].extra["colorTheme"], "crimson");

        store.save(&loaded);
        let raw = store
            .storage
            .load(storage_keys::POINT_SETS)
            .expect("saved");
        assert!(raw.contains("colorTheme"));
    }

    #[test]
    fn test_decode_defaults_invalid_fields() {
        let record = json!({
            "id": "   ",
            "totalPoints": "forty",
            "costs": { "pawn": 2, "knight": -1, "bishop": "x" }
        });

        let set = decode_point_set(&record).expect("object decodes");
        assert!(set.id.starts_with("ps-"));
        assert_eq!(set.name, DEFAULT_POINT_SET_NAME);
        assert_eq!(set.total_points, Ruleset::default_total());
        assert_eq!(set.cost("pawn"), 2.0);
        assert!(!set.costs.contains_key("knight"));
        assert!(!set.costs.contains_key("bishop"));
    }

    #[test]
    fn test_decode_skips_non_objects() {
        assert!(decode_point_set(&json!("nope")).is_none());
        assert!(decode_point_set(&json!(17)).is_none());
    }
}
