//! UI root: context wiring, catalog bootstrap, and the router shell

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::load_catalog;
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::{ConfirmDialog, ToastHost};
use crate::ui::presentation::state::{CatalogState, ConfirmState, DraftState, Severity, ToastState};

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let platform = use_context::<Platform>();

    // These must be created inside an active Dioxus runtime.
    let mut catalog = use_context_provider(CatalogState::new);
    let mut toasts = use_context_provider(ToastState::new);
    use_context_provider(ConfirmState::new);
    {
        let platform = platform.clone();
        use_context_provider(move || DraftState::new(platform));
    }

    // One fetch per app lifetime; failure degrades to an empty catalog
    // with a single notification.
    use_effect(move || {
        let platform = platform.clone();
        spawn(async move {
            match load_catalog(platform.clone()).await {
                Ok(pieces) => {
                    platform.log_info(&format!("Piece catalog loaded ({} pieces)", pieces.len()));
                    catalog.set_ready(pieces);
                }
                Err(error) => {
                    platform.log_error(&format!("Piece catalog load failed: {error}"));
                    catalog.set_failed();
                    toasts.notify(
                        &platform,
                        Severity::Error,
                        "Catalog unavailable",
                        "The piece catalog could not be loaded. Continuing with an empty catalog.",
                    );
                }
            }
        });
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }

        Router::<routes::Route> {}
        ToastHost {}
        ConfirmDialog {}
    }
}
