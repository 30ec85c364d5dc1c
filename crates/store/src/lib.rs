//! Key-value access to the stored track document.
//!
//! The server reads a single JSON document from an external store at render
//! time. The store is read-only from this side; `get` returns `None` for a
//! missing key and an error only for transport or IO failures.

mod file;
mod http;
mod memory;

pub use file::FileStore;
pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use distortion_core::Result;
use distortion_core::config::{StoreBackend, StoreConfig};
use std::sync::Arc;

/// Read-only key-value source for the track document
#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Fetch the value stored under `key`, or `None` if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Build the store implementation selected by the configuration
pub fn build_store(config: &StoreConfig) -> Result<Arc<dyn TrackStore>> {
    match &config.backend {
        StoreBackend::Http { url } => Ok(Arc::new(HttpStore::new(url, config.timeout)?)),
        StoreBackend::File { root } => Ok(Arc::new(FileStore::new(root))),
    }
}
