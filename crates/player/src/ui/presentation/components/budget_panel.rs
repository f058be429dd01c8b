//! Budget summary panel
//!
//! Shows the selected point set's name, budget total, and derived
//! budget numbers, plus the readiness gate. All numbers come from the
//! pure budget functions; this component only renders them.

use dioxus::prelude::*;

use vanguard_domain::{budget, Ruleset};

use crate::ui::presentation::state::{
    use_catalog_state, use_draft_state, use_toast_state, Severity,
};
use crate::ui::use_platform;

#[component]
pub fn BudgetPanel() -> Element {
    let draft = use_draft_state();
    let catalog = use_catalog_state();
    let mut toasts = use_toast_state();
    let platform = use_platform();

    let Some(set) = draft.with(|session| session.selected_set().cloned()) else {
        return rsx! {
            section { class: "panel panel-budget",
                h2 { "Budget" }
                p { class: "hint", "Select or create a point set to see its budget." }
            }
        };
    };

    let pieces = catalog.pieces();
    let spent = budget::format_points(budget::spent(&set));
    let remaining = budget::format_points(budget::remaining(&set));
    let total = budget::format_points(set.total_points);
    let over = budget::is_over_budget(&set);
    let unpriced = budget::unpriced_pieces(&set, &pieces).len();
    let complete = budget::is_complete(&set, &pieces);
    let custom_total = !Ruleset::is_allowed_total(set.total_points);

    let rename = {
        let draft = draft.clone();
        let id = set.id.clone();
        move |evt: Event<FormData>| draft.act(|session| session.rename_set(&id, &evt.value()))
    };
    let change_total = {
        let draft = draft.clone();
        let id = set.id.clone();
        move |evt: Event<FormData>| {
            let ruleset = Ruleset::by_id(&evt.value());
            draft.act(|session| session.set_total_points(&id, ruleset.budget));
        }
    };
    let check_ready = {
        let draft = draft.clone();
        let platform = platform.clone();
        move |_| {
            let outcome = draft.with(|session| {
                session
                    .selected_set()
                    .map(|set| budget::validate_ready(set, &catalog.pieces()))
            });
            match outcome {
                Some(Ok(())) => toasts.notify(
                    &platform,
                    Severity::Success,
                    "Army ready",
                    "Every point is allocated. Matchmaking comes next.",
                ),
                Some(Err(error)) => {
                    toasts.notify(&platform, Severity::Error, "Not ready yet", &error.to_string())
                }
                None => {}
            }
        }
    };

    let remaining_class = if over { "budget-value budget-over" } else { "budget-value" };

    rsx! {
        section { class: "panel panel-budget",
            h2 { "Budget" }
            div { class: "field",
                label { "Name" }
                input { class: "text-input", value: "{set.name}", oninput: rename }
            }
            div { class: "field",
                label { "Points budget" }
                select { class: "select", onchange: change_total,
                    if custom_total {
                        option { value: "", selected: true, disabled: true, "{total} pts (custom)" }
                    }
                    for ruleset in Ruleset::all() {
                        option {
                            value: ruleset.id,
                            selected: ruleset.budget == set.total_points,
                            "{ruleset.label}"
                        }
                    }
                }
            }
            div { class: "budget-rows",
                div { class: "budget-row",
                    span { "Total" }
                    span { class: "budget-value", "{total}" }
                }
                div { class: "budget-row",
                    span { "Spent" }
                    span { class: "budget-value", "{spent}" }
                }
                div { class: "budget-row",
                    span { "Remaining" }
                    span { class: "{remaining_class}", "{remaining}" }
                }
            }
            div { class: "budget-chips",
                if complete {
                    span { class: "chip chip-complete", "Complete" }
                }
                if unpriced > 0 {
                    span { class: "chip", "{unpriced} unpriced" }
                }
                if over {
                    span { class: "chip chip-over", "Over budget" }
                }
            }
            button { class: "btn btn-primary btn-wide", onclick: check_ready, "Check readiness" }
        }
    }
}
