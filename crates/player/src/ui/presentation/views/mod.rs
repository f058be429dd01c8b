//! Top-level views, one per route

mod draft_view;
mod lobby_view;

pub use draft_view::DraftView;
pub use lobby_view::LobbyView;
