//! Filter engine - pure search/facet filtering over the piece catalog
//!
//! Three ANDed predicates: free-text substring match, rank facet, and
//! base-piece facet. Filtering is stable: the result preserves catalog
//! order, so applying the same filter twice is a no-op.

use std::collections::BTreeSet;

use crate::value_objects::Piece;

/// Facet toggles active in the draft view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Rank tags toggled on; empty means "any rank"
    pub ranks: BTreeSet<String>,
    /// Base-piece ids toggled on; empty means "any base"
    pub bases: BTreeSet<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty() && self.bases.is_empty()
    }
}

/// Filter the catalog by text query and facet selection.
///
/// The text query matches case-insensitively against a haystack of the
/// piece name, derived base-piece id, and rank tags; an empty query
/// matches everything.
pub fn filter_pieces(catalog: &[Piece], query: &str, filters: &FilterSelection) -> Vec<Piece> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|piece| matches_query(piece, &needle))
        .filter(|piece| matches_ranks(piece, &filters.ranks))
        .filter(|piece| matches_base(piece, &filters.bases))
        .cloned()
        .collect()
}

/// De-duplicated rank tags present in the catalog, sorted
pub fn rank_options(catalog: &[Piece]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|piece| piece.ranks.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// De-duplicated derived base-piece ids present in the catalog, sorted
pub fn base_options(catalog: &[Piece]) -> Vec<String> {
    catalog
        .iter()
        .map(|piece| piece.base_piece_id())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_query(piece: &Piece, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let haystack = format!(
        "{} {} {}",
        piece.name.to_lowercase(),
        piece.base_piece_id(),
        piece
            .ranks
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    );
    haystack.contains(needle)
}

fn matches_ranks(piece: &Piece, ranks: &BTreeSet<String>) -> bool {
    ranks.is_empty()
        || piece
            .ranks
            .iter()
            .any(|tag| ranks.iter().any(|wanted| wanted.to_lowercase() == *tag))
}

fn matches_base(piece: &Piece, bases: &BTreeSet<String>) -> bool {
    bases.is_empty() || bases.contains(&piece.base_piece_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Piece> {
        [
            json!({ "id": "pawn", "name": "Pawn", "sourcePiece": "Pawn", "ranks": ["commoner"] }),
            json!({ "id": "knight", "name": "Knight", "sourcePiece": "Knight", "ranks": ["noble"] }),
            json!({ "id": "war-horse", "name": "War Horse", "sourcePiece": "Knight", "ranks": ["commoner"] }),
            json!({ "id": "friar", "name": "Friar", "sourcePiece": "Knight, Bishop", "ranks": ["noble"] }),
        ]
        .iter()
        .filter_map(Piece::from_raw)
        .collect()
    }

    fn ids(pieces: &[Piece]) -> Vec<&str> {
        pieces.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_and_filters_return_all_in_order() {
        let result = filter_pieces(&catalog(), "", &FilterSelection::default());
        assert_eq!(ids(&result), vec!["pawn", "knight", "war-horse", "friar"]);
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let result = filter_pieces(&catalog(), "  HORSE ", &FilterSelection::default());
        assert_eq!(ids(&result), vec!["war-horse"]);
    }

    #[test]
    fn test_text_matches_base_piece_and_ranks() {
        // "knight" appears in the base-piece facet of war-horse and friar
        let result = filter_pieces(&catalog(), "knight", &FilterSelection::default());
        assert_eq!(ids(&result), vec!["knight", "war-horse", "friar"]);

        let result = filter_pieces(&catalog(), "noble", &FilterSelection::default());
        assert_eq!(ids(&result), vec!["knight", "friar"]);
    }

    #[test]
    fn test_rank_facet_intersects() {
        let filters = FilterSelection {
            ranks: ["Commoner".to_string()].into(),
            ..Default::default()
        };
        let result = filter_pieces(&catalog(), "", &filters);
        assert_eq!(ids(&result), vec!["pawn", "war-horse"]);
    }

    #[test]
    fn test_base_facet() {
        let filters = FilterSelection {
            bases: ["knight".to_string()].into(),
            ..Default::default()
        };
        let result = filter_pieces(&catalog(), "", &filters);
        assert_eq!(ids(&result), vec!["knight", "war-horse", "friar"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let filters = FilterSelection {
            ranks: ["commoner".to_string()].into(),
            bases: ["knight".to_string()].into(),
        };
        let result = filter_pieces(&catalog(), "war", &filters);
        assert_eq!(ids(&result), vec!["war-horse"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filters = FilterSelection {
            ranks: ["noble".to_string()].into(),
            ..Default::default()
        };
        let once = filter_pieces(&catalog(), "kni", &filters);
        let twice = filter_pieces(&once, "kni", &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_facet_options_deduplicated_and_sorted() {
        assert_eq!(rank_options(&catalog()), vec!["commoner", "noble"]);
        assert_eq!(base_options(&catalog()), vec!["knight", "pawn"]);
    }
}
