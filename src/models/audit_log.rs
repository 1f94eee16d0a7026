use crate::models::entity::EntityKind;
use crate::types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;

/// Mutation category recorded with each audit entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

/// One append-only record of a create/update/delete action.
///
/// Entries reference their entity by kind + id only; an entry may outlive
/// the visible record since entities are never physically removed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub entity_kind: EntityKind,
    pub entity_id: EntityId,
    pub action: AuditAction,
    pub changes: Option<Json<Value>>,
    pub occurred_at: DateTime<Utc>,
}
