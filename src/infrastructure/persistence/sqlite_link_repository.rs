//! SQLite implementation of the link repository.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// SQLite repository for link storage and retrieval.
///
/// Atomicity of the single-row insert and its visibility to subsequent
/// reads are delegated to SQLite; the repository performs no
/// read-modify-write sequences of its own.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Creates the links table if it does not exist.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS links (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL UNIQUE,
                target TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<ShortLink, StoreError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO links (code, target, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target)
        .bind(created_at)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::DuplicateCode
            } else {
                StoreError::WriteFailed(e)
            }
        })?;

        Ok(ShortLink::new(
            result.last_insert_rowid(),
            new_link.code,
            new_link.target,
            created_at,
        ))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        sqlx::query_as::<_, ShortLink>(
            r#"
            SELECT id, code, target, created_at
            FROM links
            WHERE code = ?1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(StoreError::ReadFailed)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
