use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::{DocumentStore, StoreError};

// `||` on two JSONB objects overwrites top-level fields, the same rule as
// `merge_fields`. A stored non-object document is replaced outright.
const MERGE_SQL: &str = r#"
    INSERT INTO documents (key, value, updated_at)
    VALUES ($1, $2, NOW())
    ON CONFLICT (key) DO UPDATE SET
        value = CASE
            WHEN jsonb_typeof(documents.value) = 'object' THEN documents.value || EXCLUDED.value
            ELSE EXCLUDED.value
        END,
        updated_at = NOW()
"#;

/// JSONB-backed document store on the `documents` table (see `db::ensure_schema`).
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let value: Option<Value> = sqlx::query_scalar("SELECT value FROM documents WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(&value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Merges in a single upsert. Postgres serialises concurrent writers on
    /// the key's unique index, so two first-time merges both keep their fields.
    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError> {
        if !partial.is_object() {
            return Err(StoreError::NotAnObject(key.to_string()));
        }

        sqlx::query(MERGE_SQL)
            .bind(key)
            .bind(&partial)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
