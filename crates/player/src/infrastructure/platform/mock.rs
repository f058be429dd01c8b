//! Mock platform implementations for tests
//!
//! In-memory providers with no platform dependencies. The storage mock
//! shares its map across clones so a store and a restored session can
//! observe each other's writes.

use crate::ports::outbound::platform::{
    CatalogFetchError, CatalogProvider, DocumentProvider, LogProvider, SleepProvider,
    StorageProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// Sleep provider that resolves immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async {})
    }
}

/// Shared in-memory key-value storage
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.lock() {
            data.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut data) = self.data.lock() {
            data.remove(key);
        }
    }
}

/// Silent log provider
#[derive(Clone, Default)]
pub struct MockLogProvider;

impl LogProvider for MockLogProvider {
    fn info(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
}

/// Document provider recording the last title set
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<String>>,
}

impl MockDocumentProvider {
    pub fn last_title(&self) -> String {
        self.title.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut slot) = self.title.lock() {
            *slot = title.to_string();
        }
    }
}

/// Catalog provider serving a configurable payload
#[derive(Clone)]
pub struct MockCatalogProvider {
    payload: Arc<Result<String, CatalogFetchError>>,
}

impl MockCatalogProvider {
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Arc::new(Ok(payload.to_string())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            payload: Arc::new(Err(CatalogFetchError(reason.to_string()))),
        }
    }
}

impl Default for MockCatalogProvider {
    fn default() -> Self {
        Self::with_payload("[]")
    }
}

impl CatalogProvider for MockCatalogProvider {
    fn fetch_catalog(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>> {
        let payload = self.payload.as_ref().clone();
        Box::pin(async move { payload })
    }
}

/// Create a fully mocked platform container for tests
pub fn create_mock_platform(catalog: MockCatalogProvider) -> Platform {
    Platform::new(
        MockSleepProvider,
        MockStorageProvider::default(),
        MockLogProvider,
        MockDocumentProvider::default(),
        catalog,
    )
}
