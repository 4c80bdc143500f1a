#![allow(dead_code)]

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::SqliteLinkRepository;
use tinylink::state::AppState;
use tinylink::utils::code_generator::HashCodeGenerator;

/// Creates an in-memory SQLite pool with the links table ready.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    SqliteLinkRepository::new(Arc::new(pool.clone()))
        .init()
        .await
        .unwrap();

    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
    let link_service = Arc::new(LinkService::new(link_repo, Arc::new(HashCodeGenerator)));

    AppState {
        db: pool,
        base_url: "http://localhost:3000".to_string(),
        link_service,
    }
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(target)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}
