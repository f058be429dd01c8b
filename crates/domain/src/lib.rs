//! Vanguard Domain - core types and invariants for the army-drafting lobby.
//!
//! This crate holds the reference `Piece` catalog model, the user-owned
//! `PointSet` configuration, and the two pure engines that drive the
//! drafting flow: budget math (`budget`) and catalog filtering (`filter`).
//! It has no I/O and no async; adapters live in the player crate.

pub mod budget;
pub mod error;
pub mod filter;
pub mod value_objects;

pub use error::DraftError;
pub use value_objects::{Piece, PointSet, Ruleset, DEFAULT_POINT_SET_NAME, NEW_POINT_SET_NAME};
