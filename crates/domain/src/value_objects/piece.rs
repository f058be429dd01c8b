//! Piece reference data
//!
//! Pieces are loaded once at startup from an external JSON dataset and are
//! immutable afterwards. Raw records arrive untyped, so construction runs
//! through a tolerant normalization step: fields are string-coerced and
//! trimmed, rank/ability tags are lowercased, and records without an id
//! are dropped by the caller.

use std::collections::BTreeSet;

use serde_json::Value;

/// A custom chess piece from the reference catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Unique catalog key, non-empty
    pub id: String,
    /// Display name
    pub name: String,
    /// Comma-separated originating standard pieces, e.g. "Knight, Bishop"
    pub source_piece: String,
    /// Lowercase tier tags ("noble", "commoner")
    pub ranks: BTreeSet<String>,
    /// Lowercase free-form ability tags
    pub abilities: BTreeSet<String>,
    /// Optional flavor/description text
    pub description: Option<String>,
    /// Optional movement rules text
    pub move_rules: Option<String>,
}

impl Piece {
    /// Normalize a raw catalog record into a `Piece`.
    ///
    /// Returns `None` when the record is not an object or its id coerces
    /// to an empty string - such entries are silently dropped from the
    /// catalog. Unknown fields in the record are ignored.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;

        let id = coerce_string(obj.get("id"));
        if id.is_empty() {
            return None;
        }

        Some(Self {
            id,
            name: coerce_string(obj.get("name")),
            source_piece: coerce_string(obj.get("sourcePiece")),
            ranks: coerce_tag_set(obj.get("ranks")),
            abilities: coerce_tag_set(obj.get("abilities")),
            description: non_empty(coerce_string(obj.get("description"))),
            move_rules: non_empty(coerce_string(obj.get("moveRules"))),
        })
    }

    /// Derived filter facet: the first comma-separated token of
    /// `source_piece`, lower-kebab-cased. Falls back to the piece's own id
    /// when `source_piece` is blank.
    pub fn base_piece_id(&self) -> String {
        let first = self
            .source_piece
            .split(',')
            .next()
            .unwrap_or_default()
            .trim();
        if first.is_empty() {
            self.id.clone()
        } else {
            kebab_case(first)
        }
    }
}

/// Lowercase a display string and join its whitespace runs with hyphens
/// ("War Horse" -> "war-horse").
pub fn kebab_case(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Coerce a JSON value to a trimmed string. Strings are trimmed, numbers
/// and booleans are rendered, everything else (null, arrays, objects,
/// absent) becomes empty.
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a JSON value to a set of lowercase, non-empty tags.
fn coerce_tag_set(value: Option<&Value>) -> BTreeSet<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_string(Some(item)).to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect(),
        _ => BTreeSet::new(),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_normalizes_fields() {
        let raw = json!({
            "id": "  war-horse  ",
            "name": "War Horse",
            "sourcePiece": "Knight",
            "ranks": ["Commoner"],
            "abilities": ["Charge", ""],
            "description": "A sturdy mount",
            "moveRules": null,
            "points": 2,
            "devNotes": "ignored"
        });

        let piece = Piece::from_raw(&raw).expect("valid record");
        assert_eq!(piece.id, "war-horse");
        assert_eq!(piece.name, "War Horse");
        assert!(piece.ranks.contains("commoner"));
        assert!(piece.abilities.contains("charge"));
        assert_eq!(piece.abilities.len(), 1);
        assert_eq!(piece.description.as_deref(), Some("A sturdy mount"));
        assert_eq!(piece.move_rules, None);
    }

    #[test]
    fn test_from_raw_drops_empty_id() {
        assert_eq!(Piece::from_raw(&json!({ "id": "  " })), None);
        assert_eq!(Piece::from_raw(&json!({ "name": "No id" })), None);
        assert_eq!(Piece::from_raw(&json!("not an object")), None);
    }

    #[test]
    fn test_from_raw_coerces_numeric_id() {
        let piece = Piece::from_raw(&json!({ "id": 42 })).expect("coerced");
        assert_eq!(piece.id, "42");
    }

    #[test]
    fn test_base_piece_id_first_token() {
        let piece = Piece::from_raw(&json!({
            "id": "friar",
            "sourcePiece": "Knight, Bishop"
        }))
        .expect("valid record");
        assert_eq!(piece.base_piece_id(), "knight");
    }

    #[test]
    fn test_base_piece_id_kebab_cases_multiword() {
        let piece = Piece::from_raw(&json!({
            "id": "empress",
            "sourcePiece": "Old Queen, King"
        }))
        .expect("valid record");
        assert_eq!(piece.base_piece_id(), "old-queen");
    }

    #[test]
    fn test_base_piece_id_falls_back_to_id() {
        let piece = Piece::from_raw(&json!({ "id": "mystery" })).expect("valid record");
        assert_eq!(piece.base_piece_id(), "mystery");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("  Shield  Bearer "), "shield-bearer");
        assert_eq!(kebab_case("Pawn"), "pawn");
        assert_eq!(kebab_case(""), "");
    }
}
