#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

use qms_backend::{
    config::Config, db::schema, models::entity::EntityKind, state::AppState, types::EntityId,
};

/// Fresh in-memory database per call. A single connection keeps every query
/// on the same in-memory instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    schema::init_schema(&pool).await.expect("init schema");
    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".into(),
        port: 0,
        time_zone: chrono_tz::UTC,
    }
}

pub async fn test_state() -> AppState {
    AppState::new(Arc::new(test_pool().await), test_config())
}

/// Inserts a record directly, bypassing the repository, so tests can pin
/// `created_at` for window filters. No audit entry is written.
pub async fn seed_entity(
    pool: &SqlitePool,
    kind: EntityKind,
    name: &str,
    created_at: DateTime<Utc>,
) -> EntityId {
    let id = EntityId::new();
    sqlx::query(&format!(
        "INSERT INTO {} (id, name, created_at, updated_at, is_active) VALUES (?, ?, ?, ?, 1)",
        kind.table()
    ))
    .bind(id.as_str())
    .bind(name)
    .bind(created_at)
    .bind(created_at)
    .execute(pool)
    .await
    .expect("insert entity");
    id
}
