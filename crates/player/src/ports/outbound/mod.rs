//! Outbound ports - platform abstractions consumed by the application
//! and presentation layers.

pub mod platform;
pub mod platform_port;

pub use platform::{
    storage_keys, CatalogFetchError, CatalogProvider, DocumentProvider, LogProvider,
    SleepProvider, StorageProvider,
};
pub use platform_port::PlatformPort;
