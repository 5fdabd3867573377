//! Documents and their wire envelope.
//!
//! The backing store hands out documents wrapped in a reference envelope:
//!
//! ```json
//! {"ref": {"@ref": {"id": "359174888402976973"}}, "data": {"nombre": "Ana"}}
//! ```
//!
//! and pages collections as `{"data": [<document>, ...]}`. Both shapes are
//! part of the external contract (clients template straight off them), so
//! conversion lives here next to the [`Document`] type.

use serde_json::{json, Value};

use crate::error::StoreError;

/// One stored document: a store-assigned reference id plus its data object.
///
/// Documents are immutable once created; edits replace the whole `data`
/// object, there is no partial-field diffing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub ref_id: String,
    pub data: Value,
}

impl Document {
    pub fn new(ref_id: impl Into<String>, data: Value) -> Self {
        Document {
            ref_id: ref_id.into(),
            data,
        }
    }

    /// The store's reference envelope for this document.
    pub fn to_wire(&self) -> Value {
        json!({
            "ref": {"@ref": {"id": self.ref_id}},
            "data": self.data,
        })
    }

    /// Parses a reference envelope back into a document.
    pub fn from_wire(value: &Value) -> Result<Document, StoreError> {
        let ref_id = value
            .pointer("/ref/@ref/id")
            .and_then(Value::as_str)
            .ok_or_else(|| StoreError::Malformed("missing ref.@ref.id".to_string()))?;
        let data = value
            .get("data")
            .ok_or_else(|| StoreError::Malformed("missing data object".to_string()))?;
        Ok(Document::new(ref_id, data.clone()))
    }
}

/// Wraps documents in the store's page envelope: `{"data": [...]}`.
pub fn page_to_wire(documents: &[Document]) -> Value {
    json!({
        "data": documents.iter().map(Document::to_wire).collect::<Vec<_>>(),
    })
}

/// Parses a page envelope into documents.
pub fn page_from_wire(value: &Value) -> Result<Vec<Document>, StoreError> {
    let items = value
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| StoreError::Malformed("missing data array".to_string()))?;
    items.iter().map(Document::from_wire).collect()
}
