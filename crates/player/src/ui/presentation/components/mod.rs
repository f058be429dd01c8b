//! Reusable Dioxus components for the lobby and draft views

mod budget_panel;
mod confirm_dialog;
mod modal;
mod piece_detail;
mod piece_grid;
mod point_set_panel;
mod toast_host;

pub use budget_panel::BudgetPanel;
pub use confirm_dialog::ConfirmDialog;
pub use modal::Modal;
pub use piece_detail::PieceDetail;
pub use piece_grid::PieceGrid;
pub use point_set_panel::PointSetPanel;
pub use toast_host::ToastHost;
