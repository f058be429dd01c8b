//! Piece detail panel
//!
//! Shows the catalog record for the piece selected in the grid.

use dioxus::prelude::*;

use crate::ui::presentation::state::{use_catalog_state, use_draft_state};

#[component]
pub fn PieceDetail() -> Element {
    let draft = use_draft_state();
    let catalog = use_catalog_state();

    let selected_id = draft.with(|session| session.selected_piece_id().map(str::to_string));
    let piece = selected_id.and_then(|id| catalog.pieces().into_iter().find(|piece| piece.id == id));

    let Some(piece) = piece else {
        return rsx! {
            section { class: "panel panel-detail",
                h2 { "Piece" }
                p { class: "hint", "Pick a piece in the grid to see its details." }
            }
        };
    };

    rsx! {
        section { class: "panel panel-detail",
            h2 { "{piece.name}" }
            p { class: "detail-base", "Base piece: {piece.base_piece_id()}" }
            div { class: "chips",
                for rank in piece.ranks.iter() {
                    span { class: "chip", "{rank}" }
                }
                for ability in piece.abilities.iter() {
                    span { class: "chip chip-ability", "{ability}" }
                }
            }
            if let Some(move_rules) = piece.move_rules.as_ref() {
                div { class: "detail-section",
                    h3 { "Movement" }
                    p { "{move_rules}" }
                }
            }
            if let Some(description) = piece.description.as_ref() {
                div { class: "detail-section",
                    h3 { "Description" }
                    p { "{description}" }
                }
            }
        }
    }
}
