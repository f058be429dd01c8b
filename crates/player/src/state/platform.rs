//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection
//! container that aggregates all platform-specific service implementations
//! behind port traits.
//!
//! The Platform struct lives in the adapters layer because:
//! 1. It's a concrete implementation (DI container with Arc<dyn> fields)
//! 2. It contains type erasure logic (*Dyn traits and blanket impls)
//! 3. The ports layer should only contain pure interface definitions
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform
//! - Injected into Dioxus context by the composition root
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    CatalogFetchError, CatalogProvider, DocumentProvider, LogProvider, PlatformPort,
    SleepProvider, StorageProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    log: Arc<dyn LogProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    catalog: Arc<dyn CatalogProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait LogProviderDyn: Send + Sync {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait CatalogProviderDyn: Send + Sync {
    fn fetch_catalog(&self)
        -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>>;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: LogProvider + Send + Sync> LogProviderDyn for T {
    fn info(&self, msg: &str) {
        LogProvider::info(self, msg)
    }
    fn error(&self, msg: &str) {
        LogProvider::error(self, msg)
    }
    fn debug(&self, msg: &str) {
        LogProvider::debug(self, msg)
    }
    fn warn(&self, msg: &str) {
        LogProvider::warn(self, msg)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: CatalogProvider + Send + Sync> CatalogProviderDyn for T {
    fn fetch_catalog(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>> {
        CatalogProvider::fetch_catalog(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, S, L, D, C>(
        sleep: Sl,
        storage: S,
        log: L,
        document: D,
        catalog: C,
    ) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        L: LogProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        C: CatalogProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            log: Arc::new(log),
            document: Arc::new(document),
            catalog: Arc::new(catalog),
        }
    }

    /// Sleep for the given number of milliseconds.
    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Log an info message
    pub fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    /// Log an error message
    pub fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    /// Log a debug message
    pub fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    /// Log a warning message
    pub fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    /// Fetch the raw piece catalog payload
    pub fn fetch_catalog(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>> {
        self.catalog.fetch_catalog()
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that allows application services to use the platform's
/// storage through the dyn facade
///
/// This implements the StorageProvider port trait, delegating to the
/// injected `PlatformPort`. Application services like the point-set
/// store stay generic over `StorageProvider` and never see the facade.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Arc<dyn PlatformPort>,
}

impl PlatformStorageAdapter {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

// =============================================================================
// PlatformPort implementation - enables the UI to use trait abstraction
// =============================================================================

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn log_info(&self, msg: &str) {
        self.log.info(msg)
    }

    fn log_error(&self, msg: &str) {
        self.log.error(msg)
    }

    fn log_debug(&self, msg: &str) {
        self.log.debug(msg)
    }

    fn log_warn(&self, msg: &str) {
        self.log.warn(msg)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn fetch_catalog(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>> {
        self.catalog.fetch_catalog()
    }
}
