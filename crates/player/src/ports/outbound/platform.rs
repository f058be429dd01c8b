//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here. Ports layer contains only trait
//! definitions.

use std::{future::Future, pin::Pin};

use thiserror::Error;

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (e.g. toast auto-dismiss).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
///
/// Writes are best-effort: a failing backend (quota, unavailable storage)
/// must swallow the error rather than surface it.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Logging abstraction
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Failure fetching the raw piece catalog resource
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Catalog fetch failed: {0}")]
pub struct CatalogFetchError(pub String);

/// Read access to the external piece catalog resource
///
/// Returns the raw JSON payload; parsing and normalization happen in the
/// application layer so every platform shares one code path.
pub trait CatalogProvider: Clone + 'static {
    fn fetch_catalog(&self) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const POINT_SETS: &str = "vanguard_point_sets";
}
