//! Piece catalog state shared through Dioxus context
//!
//! The catalog is fetched once at startup and immutable afterwards.
//! A failed load is a valid degraded state: the catalog stays empty
//! and every view keeps working.

use dioxus::prelude::*;
use vanguard_domain::Piece;

/// Lifecycle of the startup catalog fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed,
}

/// Shared catalog state
#[derive(Clone, Copy)]
pub struct CatalogState {
    pieces: Signal<Vec<Piece>>,
    status: Signal<CatalogStatus>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            pieces: Signal::new(Vec::new()),
            status: Signal::new(CatalogStatus::Loading),
        }
    }

    /// Snapshot of the normalized catalog (empty while loading or failed)
    pub fn pieces(&self) -> Vec<Piece> {
        self.pieces.read().clone()
    }

    pub fn status(&self) -> CatalogStatus {
        *self.status.read()
    }

    pub fn set_ready(&mut self, pieces: Vec<Piece>) {
        self.pieces.set(pieces);
        self.status.set(CatalogStatus::Ready);
    }

    /// Enter the degraded empty-catalog state after a load failure.
    pub fn set_failed(&mut self) {
        self.pieces.set(Vec::new());
        self.status.set(CatalogStatus::Failed);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
