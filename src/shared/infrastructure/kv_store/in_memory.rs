// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Back handler and HTTP tests, and local development, without an external
//   store.
//
// Responsibilities
// - Hold values in a map behind a lock.
// - Simulate an offline backend and slow writes for failure-path tests.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::shared::infrastructure::kv_store::{KeyValueStore, KvError};

#[derive(Default)]
pub struct InMemoryKvStore {
    inner: RwLock<HashMap<String, Value>>,
    is_offline: bool,
    delay_set_ms: Option<u64>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_set_ms(&mut self, delay_ms: u64) {
        self.delay_set_ms = Some(delay_ms);
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn exists(&self, key: &str) -> Result<bool, KvError> {
        if self.is_offline {
            return Err(KvError::Backend("Key-value store offline".into()));
        }
        Ok(self.inner.read().await.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        if self.is_offline {
            return Err(KvError::Backend("Key-value store offline".into()));
        }
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvError> {
        if self.is_offline {
            return Err(KvError::Backend("Key-value store offline".into()));
        }
        if let Some(delay_ms) = self.delay_set_ms {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        }
        self.inner.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
