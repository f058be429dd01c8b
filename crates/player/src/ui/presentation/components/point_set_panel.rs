//! Point set list panel
//!
//! The left panel of the draft view: the paginated point-set list with
//! create, select, duplicate and delete actions. Deletion routes
//! through the shared confirm dialog.

use dioxus::prelude::*;

use vanguard_domain::budget;

use crate::ui::presentation::state::{use_confirm_state, use_draft_state};

#[component]
pub fn PointSetPanel() -> Element {
    let draft = use_draft_state();

    let (visible, selected_id, page, pages, is_empty) = draft.with(|session| {
        (
            session.visible_sets().to_vec(),
            session.selected_set_id().map(str::to_string),
            session.page_index(),
            session.page_count(),
            session.point_sets().is_empty(),
        )
    });

    let create = {
        let draft = draft.clone();
        move |_| {
            draft.act(|session| {
                session.create_set();
            })
        }
    };
    let prev_page = {
        let draft = draft.clone();
        move |_| draft.act(|session| session.set_page(session.page_index() as i64 - 1))
    };
    let next_page = {
        let draft = draft.clone();
        move |_| draft.act(|session| session.set_page(session.page_index() as i64 + 1))
    };

    rsx! {
        aside { class: "panel panel-sets",
            header { class: "panel-header",
                h2 { "Point sets" }
                button { class: "btn btn-primary", onclick: create, "New set" }
            }
            if is_empty {
                p { class: "hint", "Nothing here yet. Create a point set to start pricing pieces." }
            }
            ul { class: "set-list",
                for set in visible {
                    PointSetRow {
                        key: "{set.id}",
                        set_id: set.id.clone(),
                        name: set.name.clone(),
                        total_points: set.total_points,
                        selected: selected_id.as_deref() == Some(set.id.as_str()),
                    }
                }
            }
            if pages > 1 {
                nav { class: "pager",
                    button { class: "btn", disabled: page <= 1, onclick: prev_page, "Prev" }
                    span { class: "pager-label", "Page {page} of {pages}" }
                    button { class: "btn", disabled: page >= pages, onclick: next_page, "Next" }
                }
            }
        }
    }
}

#[component]
fn PointSetRow(set_id: String, name: String, total_points: f64, selected: bool) -> Element {
    let draft = use_draft_state();
    let mut confirm = use_confirm_state();

    let select = {
        let draft = draft.clone();
        let id = set_id.clone();
        move |_| draft.act(|session| session.select_set(&id))
    };
    let duplicate = {
        let draft = draft.clone();
        let id = set_id.clone();
        move |evt: Event<MouseData>| {
            evt.stop_propagation();
            draft.act(|session| session.duplicate_set(&id));
        }
    };
    let delete = {
        let draft = draft.clone();
        let id = set_id.clone();
        let display = name.clone();
        move |evt: Event<MouseData>| {
            evt.stop_propagation();
            let draft = draft.clone();
            let id = id.clone();
            confirm.request(
                format!("Delete \"{display}\"?"),
                "The point set and all its piece costs are removed permanently.".to_string(),
                "Delete",
                move || draft.act(|session| session.delete_set(&id)),
            );
        }
    };

    let row_class = if selected { "set-row set-row-selected" } else { "set-row" };
    let badge = budget::format_points(total_points);

    rsx! {
        li { class: "{row_class}", onclick: select,
            div { class: "set-row-main",
                span { class: "set-name", "{name}" }
                span { class: "set-badge", "{badge} pts" }
            }
            div { class: "set-row-actions",
                button { class: "btn btn-small", onclick: duplicate, "Duplicate" }
                button { class: "btn btn-small btn-danger", onclick: delete, "Delete" }
            }
        }
    }
}
