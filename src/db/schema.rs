//! Idempotent storage setup.
//!
//! Ensures the five entity tables and the shared audit table exist. Runs on
//! every process start without touching existing data.

use sqlx::SqlitePool;

use crate::models::entity::EntityKind;

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for kind in EntityKind::ALL {
        let table = kind.table();
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (\
                 id TEXT PRIMARY KEY, \
                 name TEXT NOT NULL, \
                 created_at TEXT NOT NULL, \
                 updated_at TEXT NOT NULL, \
                 is_active BOOLEAN NOT NULL DEFAULT 1\
             )"
        ))
        .execute(pool)
        .await?;
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_name ON {table}(name)"
        ))
        .execute(pool)
        .await?;
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_created ON {table}(created_at)"
        ))
        .execute(pool)
        .await?;
    }

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS audit_log (\
             id INTEGER PRIMARY KEY AUTOINCREMENT, \
             entity_kind TEXT NOT NULL, \
             entity_id TEXT NOT NULL, \
             action TEXT NOT NULL, \
             changes TEXT, \
             occurred_at TEXT NOT NULL\
         )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
