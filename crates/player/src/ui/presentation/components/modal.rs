//! Shared modal dialog shell
//!
//! One layout for every dialog in the lobby: title, optional subtitle,
//! arbitrary body content, and a primary/secondary button pair.

use dioxus::prelude::*;

#[component]
pub fn Modal(
    title: String,
    #[props(default)] subtitle: Option<String>,
    primary_text: String,
    #[props(default)] secondary_text: Option<String>,
    on_primary: EventHandler<()>,
    #[props(default)] on_secondary: Option<EventHandler<()>>,
    #[props(default = false)] primary_disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", "aria-modal": "true",
                header { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    if let Some(subtitle) = subtitle.as_ref() {
                        p { class: "modal-subtitle", "{subtitle}" }
                    }
                }
                div { class: "modal-body", {children} }
                footer { class: "modal-footer",
                    if let Some(secondary) = secondary_text.as_ref() {
                        button {
                            class: "btn",
                            onclick: move |_| {
                                if let Some(handler) = on_secondary.as_ref() {
                                    handler.call(());
                                }
                            },
                            "{secondary}"
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: primary_disabled,
                        onclick: move |_| on_primary.call(()),
                        "{primary_text}"
                    }
                }
            }
        }
    }
}
