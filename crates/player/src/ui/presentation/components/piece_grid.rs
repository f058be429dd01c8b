//! Piece grid panel
//!
//! The center panel of the draft view: search box, rank/base filter
//! chips, and the filtered piece catalog with per-piece cost inputs for
//! the selected point set.

use dioxus::prelude::*;

use vanguard_domain::filter;
use vanguard_domain::{budget, Piece};

use crate::ui::presentation::state::{use_catalog_state, use_draft_state, CatalogStatus};

#[component]
pub fn PieceGrid() -> Element {
    let draft = use_draft_state();
    let catalog = use_catalog_state();

    let pieces = catalog.pieces();
    let status = catalog.status();
    let (query, filters, selected_set, selected_piece) = draft.with(|session| {
        (
            session.search_query().to_string(),
            session.filters().clone(),
            session.selected_set().cloned(),
            session.selected_piece_id().map(str::to_string),
        )
    });

    let rank_options = filter::rank_options(&pieces);
    let base_options = filter::base_options(&pieces);
    let visible = filter::filter_pieces(&pieces, &query, &filters);

    let search = {
        let draft = draft.clone();
        move |evt: Event<FormData>| draft.act(|session| session.set_search_query(&evt.value()))
    };

    let set_id = selected_set.as_ref().map(|set| set.id.clone());

    rsx! {
        section { class: "panel panel-pieces",
            header { class: "panel-header",
                h2 { "Pieces" }
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search by name, base piece, or rank",
                    value: "{query}",
                    oninput: search,
                }
            }
            div { class: "chip-rows",
                div { class: "chips",
                    for tag in rank_options {
                        FilterChip { tag: tag.clone(), active: filters.ranks.contains(&tag), is_rank: true }
                    }
                }
                div { class: "chips",
                    for tag in base_options {
                        FilterChip { tag: tag.clone(), active: filters.bases.contains(&tag), is_rank: false }
                    }
                }
            }
            if status == CatalogStatus::Loading {
                p { class: "hint", "Loading the piece catalog..." }
            } else if pieces.is_empty() {
                p { class: "hint", "The piece catalog is empty. Drafting still works, there is just nothing to price." }
            } else if visible.is_empty() {
                p { class: "hint", "No pieces match the current search and filters." }
            }
            div { class: "piece-grid",
                for piece in visible {
                    PieceCard {
                        key: "{piece.id}",
                        selected: selected_piece.as_deref() == Some(piece.id.as_str()),
                        cost: selected_set.as_ref().map(|set| set.cost(&piece.id)),
                        set_id: set_id.clone(),
                        piece,
                    }
                }
            }
        }
    }
}

#[component]
fn FilterChip(tag: String, active: bool, is_rank: bool) -> Element {
    let draft = use_draft_state();

    let toggle = {
        let draft = draft.clone();
        let tag = tag.clone();
        move |_| {
            let (mut ranks, mut bases) =
                draft.with(|session| (session.filters().ranks.clone(), session.filters().bases.clone()));
            let target = if is_rank { &mut ranks } else { &mut bases };
            if !target.insert(tag.clone()) {
                target.remove(&tag);
            }
            draft.act(|session| session.set_filters(ranks.clone(), bases.clone()));
        }
    };

    let class = if active { "chip chip-active" } else { "chip" };
    rsx! {
        button { class: "{class}", onclick: toggle, "{tag}" }
    }
}

#[component]
fn PieceCard(piece: Piece, set_id: Option<String>, cost: Option<f64>, selected: bool) -> Element {
    let draft = use_draft_state();

    let select = {
        let draft = draft.clone();
        let id = piece.id.clone();
        move |_| draft.act(|session| session.select_piece(&id))
    };
    let edit_cost = {
        let draft = draft.clone();
        let piece_id = piece.id.clone();
        let set_id = set_id.clone();
        move |evt: Event<FormData>| {
            if let Some(set_id) = set_id.as_deref() {
                draft.act(|session| session.set_cost(set_id, &piece_id, &evt.value()));
            }
        }
    };

    // Unset costs render as a blank field, not "0"
    let cost_value = match cost {
        Some(cost) if cost > 0.0 => budget::format_points(cost),
        _ => String::new(),
    };
    let ranks = piece.ranks.iter().cloned().collect::<Vec<_>>().join(", ");
    let card_class = if selected { "piece-card piece-card-selected" } else { "piece-card" };

    rsx! {
        div { class: "{card_class}", onclick: select,
            p { class: "piece-name", "{piece.name}" }
            p { class: "piece-base", "Base: {piece.base_piece_id()}" }
            if !ranks.is_empty() {
                p { class: "piece-tags", "{ranks}" }
            }
            input {
                class: "cost-input",
                r#type: "number",
                min: "0",
                step: "0.5",
                placeholder: "pts",
                disabled: set_id.is_none(),
                value: "{cost_value}",
                onclick: |evt| evt.stop_propagation(),
                oninput: edit_cost,
            }
        }
    }
}
