//! Document store collaborator.
//!
//! Documents are JSON objects addressed by `collection/id` keys. `put`
//! replaces a document; `merge` overwrites the top-level fields named in a
//! partial object, creating the document when absent. Backends:
//! [`InMemoryStore`] and [`PgDocumentStore`].

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("merge into '{0}' requires a JSON object")]
    NotAnObject(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;

    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError>;
}

/// Builds a `collection/id` document key.
pub fn doc_key(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

/// Copies each top-level field of `incoming` over `target`.
///
/// Fields absent from `incoming` are kept. Nested values are replaced whole,
/// so re-submitting a section never leaves stale answers behind.
pub fn merge_fields(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    target.extend(incoming);
}

/// Applies a merge to an optional existing document held in memory.
pub(crate) fn merged_document(
    key: &str,
    existing: Option<Value>,
    partial: Value,
) -> Result<Value, StoreError> {
    let Value::Object(incoming) = partial else {
        return Err(StoreError::NotAnObject(key.to_string()));
    };
    let mut document = match existing {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    };
    merge_fields(&mut document, incoming);
    Ok(Value::Object(document))
}
