//! In-memory document store.
//!
//! The store used by the services in tests and in the example deployment.
//! Ids are monotonically increasing integers rendered as decimal strings,
//! the same shape the hosted store assigns (just shorter).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::document::Document;
use crate::error::StoreError;
use crate::DocumentStore;

/// Thread-safe in-memory store over one flat collection.
pub struct MemoryStore {
    docs: RwLock<BTreeMap<u64, Value>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::with_base(1)
    }

    /// Starts id assignment at `base`. The hosted store hands out long
    /// numeric ids; seeding with a large base keeps demo output realistic.
    pub fn with_base(base: u64) -> Self {
        MemoryStore {
            docs: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(base),
        }
    }

    /// Creates a store pre-populated with `data` objects, in order.
    pub async fn seeded(base: u64, seed: Vec<Value>) -> Self {
        let store = MemoryStore::with_base(base);
        for data in seed {
            // Seeding cannot fail on a fresh store.
            let _ = store.create(data).await;
        }
        store
    }

    fn parse_id(id: &str) -> Result<u64, StoreError> {
        id.parse::<u64>()
            .map_err(|_| StoreError::NotFound(id.to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Document>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .map(|(id, data)| Document::new(id.to_string(), data.clone()))
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Document, StoreError> {
        let key = Self::parse_id(id)?;
        let docs = self.docs.read().await;
        docs.get(&key)
            .map(|data| Document::new(id, data.clone()))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn create(&self, data: Value) -> Result<Document, StoreError> {
        let key = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut docs = self.docs.write().await;
        docs.insert(key, data.clone());
        Ok(Document::new(key.to_string(), data))
    }

    async fn update(&self, id: &str, data: Value) -> Result<Document, StoreError> {
        let key = Self::parse_id(id)?;
        let mut docs = self.docs.write().await;
        match docs.get_mut(&key) {
            Some(slot) => {
                *slot = data.clone();
                Ok(Document::new(id, data))
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &str) -> Result<Document, StoreError> {
        let key = Self::parse_id(id)?;
        let mut docs = self.docs.write().await;
        docs.remove(&key)
            .map(|data| Document::new(id, data))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
