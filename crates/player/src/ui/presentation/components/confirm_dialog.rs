//! Confirm dialog for destructive actions
//!
//! Renders the pending `ConfirmRequest` (if any) in the shared modal
//! shell. Confirm runs the staged action; cancel just drops it.

use dioxus::prelude::*;

use crate::ui::presentation::components::Modal;
use crate::ui::presentation::state::use_confirm_state;

#[component]
pub fn ConfirmDialog() -> Element {
    let mut confirm = use_confirm_state();
    let Some(request) = confirm.pending() else {
        return rsx! {};
    };

    rsx! {
        Modal {
            title: request.title.clone(),
            primary_text: request.confirm_label.clone(),
            secondary_text: "Cancel".to_string(),
            on_primary: move |_| confirm.resolve(true),
            on_secondary: move |_| confirm.resolve(false),
            p { class: "hint", "{request.body}" }
        }
    }
}
