//! Draft view
//!
//! The budget-allocation screen: point-set list on the left, filtered
//! piece grid in the center, budget summary and piece detail on the
//! right. All three panels are pure consumers of the shared draft and
//! catalog state.

use dioxus::prelude::*;

use crate::ui::presentation::components::{BudgetPanel, PieceDetail, PieceGrid, PointSetPanel};
use crate::ui::routes::Route;
use crate::ui::use_platform;

#[component]
pub fn DraftView() -> Element {
    let platform = use_platform();

    {
        let platform = platform.clone();
        use_effect(move || platform.set_page_title("Vanguard Draft"));
    }

    rsx! {
        main { class: "draft",
            header { class: "draft-header",
                Link { class: "link", to: Route::LobbyView {}, "Back to lobby" }
                h1 { "Draft your army" }
            }
            div { class: "draft-panels",
                PointSetPanel {}
                PieceGrid {}
                div { class: "panel-column",
                    BudgetPanel {}
                    PieceDetail {}
                }
            }
        }
    }
}
