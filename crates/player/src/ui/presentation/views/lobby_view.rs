//! Lobby view
//!
//! Entry screen: create a game (ruleset picker), join a game (match
//! code stub), and a short ruleset explainer. Creating a game opens a
//! fresh point set with the chosen budget and navigates to the draft.

use dioxus::prelude::*;

use vanguard_domain::Ruleset;

use crate::ui::presentation::components::Modal;
use crate::ui::presentation::state::{use_draft_state, use_toast_state, Severity};
use crate::ui::routes::Route;
use crate::ui::use_platform;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LobbyDialog {
    None,
    Create,
    Join,
    Explainer,
}

#[component]
pub fn LobbyView() -> Element {
    let platform = use_platform();
    let draft = use_draft_state();
    let mut toasts = use_toast_state();
    let navigator = use_navigator();

    let mut dialog = use_signal(|| LobbyDialog::None);
    let mut ruleset_id = use_signal(|| Ruleset::all()[0].id.to_string());
    let mut join_code = use_signal(String::new);

    {
        let platform = platform.clone();
        use_effect(move || platform.set_page_title("Vanguard Lobby"));
    }

    let create_game = {
        let draft = draft.clone();
        let platform = platform.clone();
        move |_| {
            let ruleset = Ruleset::by_id(&ruleset_id());
            draft.act(|session| {
                session.create_set_with_total(ruleset.budget);
            });
            toasts.notify(
                &platform,
                Severity::Success,
                "Game created",
                &format!("{} budget selected. Draft your army.", ruleset.label),
            );
            dialog.set(LobbyDialog::None);
            navigator.push(Route::DraftView {});
        }
    };
    let join_game = {
        let platform = platform.clone();
        move |_| {
            let code = join_code().trim().to_string();
            if code.len() < 4 {
                toasts.notify(
                    &platform,
                    Severity::Error,
                    "Invalid code",
                    "Enter a match code of at least 4 characters.",
                );
                return;
            }
            toasts.notify(
                &platform,
                Severity::Info,
                "Join game",
                &format!("Tried to join code {}. Matchmaking is not wired up yet.", code.to_uppercase()),
            );
            dialog.set(LobbyDialog::None);
            join_code.set(String::new());
        }
    };

    rsx! {
        main { class: "lobby",
            h1 { class: "lobby-title", "Vanguard" }
            p { class: "tagline", "Draft a custom chess army, then take it to battle." }
            div { class: "lobby-actions",
                button {
                    class: "btn btn-primary btn-large",
                    onclick: move |_| dialog.set(LobbyDialog::Create),
                    "Create game"
                }
                button {
                    class: "btn btn-large",
                    onclick: move |_| dialog.set(LobbyDialog::Join),
                    "Join game"
                }
            }
            button {
                class: "link-button",
                onclick: move |_| dialog.set(LobbyDialog::Explainer),
                "What is a ruleset?"
            }
        }
        match dialog() {
            LobbyDialog::None => rsx! {},
            LobbyDialog::Create => rsx! {
                Modal {
                    title: "Create game",
                    subtitle: "Choose a ruleset (points budget + piece catalog). A match code comes later.".to_string(),
                    primary_text: "Continue",
                    secondary_text: "Not now".to_string(),
                    on_primary: create_game,
                    on_secondary: move |_| dialog.set(LobbyDialog::None),
                    div { class: "field",
                        label { "Ruleset / points budget" }
                        select {
                            class: "select",
                            onchange: move |evt: Event<FormData>| ruleset_id.set(evt.value()),
                            for ruleset in Ruleset::all() {
                                option {
                                    value: ruleset.id,
                                    selected: ruleset.id == ruleset_id(),
                                    "{ruleset.label}"
                                }
                            }
                        }
                        p { class: "hint", "{Ruleset::by_id(&ruleset_id()).description}" }
                    }
                }
            },
            LobbyDialog::Join => rsx! {
                Modal {
                    title: "Join game",
                    subtitle: "Enter a match code. This is UI-only for now.".to_string(),
                    primary_text: "Join",
                    secondary_text: "Cancel".to_string(),
                    on_primary: join_game,
                    on_secondary: move |_| dialog.set(LobbyDialog::None),
                    div { class: "field",
                        label { "Match code" }
                        input {
                            class: "text-input",
                            placeholder: "e.g. KN1GHT",
                            value: "{join_code}",
                            oninput: move |evt: Event<FormData>| join_code.set(evt.value()),
                        }
                    }
                }
            },
            LobbyDialog::Explainer => rsx! {
                Modal {
                    title: "What is a ruleset?",
                    subtitle: "A neat little package of game rules for drafting and play.".to_string(),
                    primary_text: "Got it",
                    on_primary: move |_| dialog.set(LobbyDialog::None),
                    p { class: "hint",
                        "A ruleset bundles the points budget with the piece catalog rules. "
                        "One ruleset might allow a lean 40-point army, another a 400-point sandbox."
                    }
                }
            },
        }
    }
}
