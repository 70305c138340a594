use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{merged_document, DocumentStore, StoreError};

/// Process-local document store. Used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemoryStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.documents.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let document = merged_document(key, documents.get(key).cloned(), partial)?;
        documents.insert(key.to_string(), document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let store = InMemoryStore::new();
        assert!(store.get("users/nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_document() {
        let store = InMemoryStore::new();
        store.put("users/a", json!({"x": 1, "y": 2})).await.unwrap();
        store.put("users/a", json!({"x": 3})).await.unwrap();
        assert_eq!(store.get("users/a").await.unwrap(), Some(json!({"x": 3})));
    }

    #[tokio::test]
    async fn test_merge_creates_then_extends() {
        let store = InMemoryStore::new();
        store.merge("users/a", json!({"x": 1})).await.unwrap();
        store.merge("users/a", json!({"y": {"z": true}})).await.unwrap();
        assert_eq!(
            store.get("users/a").await.unwrap(),
            Some(json!({"x": 1, "y": {"z": true}}))
        );
    }

    #[tokio::test]
    async fn test_failed_merge_keeps_existing_document() {
        let store = InMemoryStore::new();
        store.put("users/a", json!({"x": 1})).await.unwrap();
        assert!(store.merge("users/a", json!("oops")).await.is_err());
        assert_eq!(store.get("users/a").await.unwrap(), Some(json!({"x": 1})));
    }
}
