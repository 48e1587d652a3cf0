//! Key-value store implementations
//!
//! Two stores are provided:
//! - `MemoryStore` - a HashMap, used by tests and embedders that already hold the data
//! - `JsonFileStore` - a JSON object snapshot of the device store on disk
//!
//! Both implement the sync and async store traits.
//!
//! # Snapshot format
//!
//! ```json
//! { "@gofinances:transactions": "[{\"id\":\"1\", ...}]" }
//! ```
//!
//! String values are returned verbatim, which is how the device store keeps
//! them. Any other JSON value (for example a literal array) is returned
//! re-serialized, so hand-written snapshots do not need to escape anything.

use crate::core::traits::{AsyncKeyValueStore, KeyValueStore};
use crate::types::DashboardError;
use futures::future::{self, BoxFuture, FutureExt};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the recording flow keeps the transaction list
pub const TRANSACTIONS_KEY: &str = "@gofinances:transactions";

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DashboardError> {
        Ok(self.items.get(key).cloned())
    }
}

impl AsyncKeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> BoxFuture<'static, Result<Option<String>, DashboardError>> {
        future::ready(Ok(self.items.get(key).cloned())).boxed()
    }
}

/// Store backed by a JSON snapshot file
///
/// The file is re-read on every `get_item`, so each activation sees the
/// snapshot as it is at that moment.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, DashboardError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| read_error(&self.path, e))?;
        lookup(&content, key)
    }
}

impl AsyncKeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> BoxFuture<'static, Result<Option<String>, DashboardError>> {
        let path = self.path.clone();
        let key = key.to_string();

        async move {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| read_error(&path, e))?;
            lookup(&content, &key)
        }
        .boxed()
    }
}

fn read_error(path: &Path, error: std::io::Error) -> DashboardError {
    if error.kind() == ErrorKind::NotFound {
        DashboardError::file_not_found(&path.display().to_string())
    } else {
        DashboardError::from(error)
    }
}

/// Find `key` in a snapshot document
fn lookup(content: &str, key: &str) -> Result<Option<String>, DashboardError> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let document: Map<String, Value> = serde_json::from_str(content)
        .map_err(|e| DashboardError::malformed_store(&format!("store snapshot: {}", e)))?;

    Ok(match document.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => Some(other.to_string()),
    })
}
