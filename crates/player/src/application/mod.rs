//! Application layer - use cases over the outbound ports
//!
//! Holds the catalog loader, the persisted point-set store, and the
//! draft session (the single source of truth for one drafting flow).

pub mod catalog;
pub mod draft_session;
pub mod point_set_store;

pub use catalog::{load_catalog, normalize_catalog, CatalogError};
pub use draft_session::{DraftSession, SubscriptionId, PAGE_SIZE};
pub use point_set_store::PointSetStore;
