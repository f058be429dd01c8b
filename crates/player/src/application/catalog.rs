//! Piece catalog loader
//!
//! Fetches the raw catalog payload through the platform port and
//! normalizes it into domain `Piece` values. Load failures are
//! recoverable: callers substitute an empty catalog and show a single
//! notification, and every downstream screen must treat an empty
//! catalog as a valid degraded state.

use std::sync::Arc;

use thiserror::Error;

use vanguard_domain::Piece;

use crate::ports::outbound::PlatformPort;

/// Catalog load failure - non-fatal, surfaced once to the user
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The external resource could not be fetched
    #[error("Could not load the piece catalog: {0}")]
    Fetch(String),

    /// The payload was not valid JSON
    #[error("Piece catalog payload is not valid JSON")]
    Parse,

    /// The payload parsed but was not a sequence of records
    #[error("Piece catalog payload is not a list")]
    NotAList,
}

/// Fetch and normalize the piece catalog.
pub async fn load_catalog(platform: Arc<dyn PlatformPort>) -> Result<Vec<Piece>, CatalogError> {
    let payload = platform
        .fetch_catalog()
        .await
        .map_err(|e| CatalogError::Fetch(e.0))?;
    normalize_catalog(&payload)
}

/// Parse a raw JSON payload into the normalized catalog.
///
/// The payload must be a JSON array; each element is normalized via
/// `Piece::from_raw`. Records that fail normalization (empty id) are
/// dropped silently, and when two records share an id only the first
/// survives, so ids are unique after load.
pub fn normalize_catalog(payload: &str) -> Result<Vec<Piece>, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|_| CatalogError::Parse)?;
    let records = value.as_array().ok_or(CatalogError::NotAList)?;

    let mut seen = std::collections::BTreeSet::new();
    let pieces: Vec<Piece> = records
        .iter()
        .filter_map(Piece::from_raw)
        .filter(|piece| seen.insert(piece.id.clone()))
        .collect();
    let dropped = records.len() - pieces.len();
    if dropped > 0 {
        tracing::warn!("Dropped {dropped} catalog records during normalization");
    }

    Ok(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_valid_payload() {
        let payload = r#"[
            { "id": "pawn", "name": "Pawn", "ranks": ["Commoner"], "points": 1 },
            { "id": "knight", "name": "Knight", "ranks": ["Noble"] }
        ]"#;

        let pieces = normalize_catalog(payload).expect("valid payload");
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].id, "pawn");
        assert!(pieces[0].ranks.contains("commoner"));
    }

    #[test]
    fn test_normalize_drops_invalid_records() {
        let payload = r#"[
            { "id": "pawn" },
            { "id": "" },
            { "name": "no id" },
            "not an object"
        ]"#;

        let pieces = normalize_catalog(payload).expect("valid payload");
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_normalize_keeps_first_of_duplicate_ids() {
        let payload = r#"[
            { "id": "pawn", "name": "Pawn" },
            { "id": "pawn", "name": "Impostor Pawn" },
            { "id": "knight", "name": "Knight" }
        ]"#;

        let pieces = normalize_catalog(payload).expect("valid payload");
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].name, "Pawn");
        assert_eq!(pieces[1].id, "knight");
    }

    #[test]
    fn test_normalize_rejects_malformed_payloads() {
        assert_eq!(normalize_catalog("not json"), Err(CatalogError::Parse));
        assert_eq!(
            normalize_catalog(r#"{"pieces": []}"#),
            Err(CatalogError::NotAList)
        );
    }

    #[test]
    fn test_empty_list_is_a_valid_catalog() {
        assert_eq!(normalize_catalog("[]"), Ok(vec![]));
    }

    #[test]
    fn test_bundled_dataset_normalizes() {
        let payload = include_str!("../../assets/data/pieces.json");
        let pieces = normalize_catalog(payload).expect("bundled dataset is valid");
        assert_eq!(pieces.len(), 27);
        assert!(pieces.iter().all(|p| !p.id.is_empty()));
        assert!(pieces.iter().all(|p| !p.ranks.is_empty()));
    }
}
