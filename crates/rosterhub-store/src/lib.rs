//! # Rosterhub Store - Document Store Abstraction
//!
//! Each roster service keeps its athletes in one flat collection of a
//! hosted document store. This crate holds the pieces the rest of the
//! system needs to talk about that store without knowing which one it is:
//!
//! - [`Document`]: a store-assigned reference id plus a free-form data
//!   object, with its wire envelope (`ref."@ref".id` / `{"data": [...]}`)
//! - [`DocumentStore`]: the five operations every service wraps
//!   (list/get/create/update/delete)
//! - [`MemoryStore`]: the in-memory implementation used by tests and the
//!   example deployment
//!
//! There are no transactions, no retries and no query language here: every
//! service call is exactly one store operation.

mod document;
mod error;
mod memory;

use async_trait::async_trait;
use serde_json::Value;

pub use document::{page_from_wire, page_to_wire, Document};
pub use error::StoreError;
pub use memory::MemoryStore;

/// The document operations a roster service delegates to.
///
/// `update` replaces the document's data object wholesale; `delete`
/// returns the removed document, which the services relay as their ack.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Document>, StoreError>;
    async fn get(&self, id: &str) -> Result<Document, StoreError>;
    async fn create(&self, data: Value) -> Result<Document, StoreError>;
    async fn update(&self, id: &str, data: Value) -> Result<Document, StoreError>;
    async fn delete(&self, id: &str) -> Result<Document, StoreError>;
}
