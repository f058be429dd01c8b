//! Toast overlay
//!
//! Renders the shared toast queue in a fixed stack. Toasts dismiss
//! themselves after a few seconds (see `ToastState::notify`) or on
//! click.

use dioxus::prelude::*;

use crate::ui::presentation::state::{use_toast_state, Severity, Toast};

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toast_state();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts.toasts() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toast_state();
    let id = toast.id;
    let severity_class = match toast.severity {
        Severity::Info => "toast-info",
        Severity::Success => "toast-success",
        Severity::Error => "toast-error",
    };

    rsx! {
        div {
            class: "toast {severity_class}",
            onclick: move |_| toasts.dismiss(id),
            p { class: "toast-title", "{toast.title}" }
            p { class: "toast-body", "{toast.body}" }
        }
    }
}
