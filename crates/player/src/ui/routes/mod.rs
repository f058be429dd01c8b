//! Route table for the player client

use dioxus::prelude::*;

use crate::ui::presentation::views::{DraftView, LobbyView};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    LobbyView {},

    #[route("/draft")]
    DraftView {},
}
