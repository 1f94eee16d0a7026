//! Audit trail storage.
//!
//! Entries are appended by the entity repository inside each mutation's
//! transaction and read back most-recent-first. They are never updated or
//! deleted.

use serde_json::Value;
use sqlx::{types::Json, Sqlite, SqlitePool, Transaction};

use crate::error::AppError;
use crate::models::audit_log::{AuditAction, AuditEntry};
use crate::models::entity::EntityKind;
use crate::types::EntityId;

const SELECT_COLUMNS: &str = "id, entity_kind, entity_id, action, changes, occurred_at";

/// Appends one audit entry on the transaction performing the mutation, so
/// the entry commits atomically with it.
pub async fn record_entry(
    tx: &mut Transaction<'_, Sqlite>,
    kind: EntityKind,
    entity_id: &EntityId,
    action: AuditAction,
    changes: Option<Value>,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO audit_log (entity_kind, entity_id, action, changes, occurred_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(kind)
    .bind(entity_id.as_str())
    .bind(action)
    .bind(changes.map(Json))
    .bind(chrono::Utc::now())
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Most-recent-first audit listing, capped by `limit`.
pub async fn list_entries(db: &SqlitePool, limit: i64) -> Result<Vec<AuditEntry>, AppError> {
    let query = format!(
        "SELECT {} FROM audit_log ORDER BY occurred_at DESC, id DESC LIMIT ?",
        SELECT_COLUMNS
    );
    let rows = sqlx::query_as::<_, AuditEntry>(&query)
        .bind(limit)
        .fetch_all(db)
        .await?;
    Ok(rows)
}
