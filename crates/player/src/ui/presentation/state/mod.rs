//! Reactive view state shared through Dioxus context

use dioxus::prelude::*;

mod catalog_state;
mod confirm_state;
mod draft_state;
mod toast_state;

pub use catalog_state::{CatalogState, CatalogStatus};
pub use confirm_state::{ConfirmRequest, ConfirmState};
pub use draft_state::DraftState;
pub use toast_state::{Severity, Toast, ToastState, TOAST_DISMISS_MS};

/// Hook to access the shared catalog state
pub fn use_catalog_state() -> CatalogState {
    use_context::<CatalogState>()
}

/// Hook to access the shared draft session state
pub fn use_draft_state() -> DraftState {
    use_context::<DraftState>()
}

/// Hook to access the toast queue
pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

/// Hook to access the confirm dialog slot
pub fn use_confirm_state() -> ConfirmState {
    use_context::<ConfirmState>()
}
