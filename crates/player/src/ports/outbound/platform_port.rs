//! Object-safe platform facade for UI consumption
//!
//! UI components receive `Arc<dyn PlatformPort>` via Dioxus context and
//! never see the concrete provider types.

use std::{future::Future, pin::Pin};

use super::platform::CatalogFetchError;

/// Dyn-safe union of the platform provider traits
pub trait PlatformPort: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    fn storage_save(&self, key: &str, value: &str);
    fn storage_load(&self, key: &str) -> Option<String>;
    fn storage_remove(&self, key: &str);

    fn log_info(&self, msg: &str);
    fn log_error(&self, msg: &str);
    fn log_debug(&self, msg: &str);
    fn log_warn(&self, msg: &str);

    fn set_page_title(&self, title: &str);

    fn fetch_catalog(&self)
        -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>>;
}
