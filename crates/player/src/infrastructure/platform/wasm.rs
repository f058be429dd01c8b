//! WASM platform implementations
//!
//! Browser-backed providers: localStorage for persistence, gloo timers
//! for sleeping, gloo-net for fetching the catalog asset, and the DOM
//! document for the page title.

use crate::ports::outbound::platform::{
    CatalogFetchError, CatalogProvider, DocumentProvider, LogProvider, SleepProvider,
    StorageProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// Relative URL of the bundled piece catalog asset
const CATALOG_URL: &str = "/assets/data/pieces.json";

/// WASM sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms as u32).await;
        })
    }
}

/// WASM storage provider backed by browser localStorage
///
/// All failures (storage disabled, quota exceeded) are logged and
/// swallowed per the storage port contract.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, skipping save of {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage write failed for {key}");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// WASM log provider routed through tracing (tracing-wasm forwards to
/// the browser console)
#[derive(Clone, Default)]
pub struct WasmLogProvider;

impl LogProvider for WasmLogProvider {
    fn info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// WASM document provider for browser page title
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM catalog provider fetching the bundled dataset over HTTP
#[derive(Clone, Default)]
pub struct WasmCatalogProvider;

impl CatalogProvider for WasmCatalogProvider {
    fn fetch_catalog(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, CatalogFetchError>> + 'static>> {
        Box::pin(async move {
            let response = gloo_net::http::Request::get(CATALOG_URL)
                .send()
                .await
                .map_err(|e| CatalogFetchError(e.to_string()))?;
            if !response.ok() {
                return Err(CatalogFetchError(format!(
                    "HTTP {} fetching {CATALOG_URL}",
                    response.status()
                )));
            }
            response
                .text()
                .await
                .map_err(|e| CatalogFetchError(e.to_string()))
        })
    }
}

/// Create the WASM platform container
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmStorageProvider,
        WasmLogProvider,
        WasmDocumentProvider,
        WasmCatalogProvider,
    )
}
