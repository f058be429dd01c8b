//! Value objects for the drafting domain

mod piece;
mod point_set;
mod ruleset;

pub use piece::{kebab_case, Piece};
pub use point_set::{PointSet, DEFAULT_POINT_SET_NAME, NEW_POINT_SET_NAME};
pub use ruleset::Ruleset;
