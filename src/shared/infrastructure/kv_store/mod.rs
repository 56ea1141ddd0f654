// Key-value store port.
//
// Purpose
// - Describe the narrow store contract the attendance record lives behind:
//   existence check, whole-value get, whole-value set.
//
// Boundaries
// - No partial updates, no versioning, no locking. One key holds one JSON
//   document and every write replaces it.
//
// Testing guidance
// - Use the in-memory implementation; it can simulate an offline backend and
//   slow writes.

pub mod in_memory;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KvError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn exists(&self, key: &str) -> Result<bool, KvError>;
    async fn get(&self, key: &str) -> Result<Option<Value>, KvError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), KvError>;
}
