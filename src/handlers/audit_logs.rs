use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    models::audit_log::{AuditAction, AuditEntry},
    models::entity::EntityKind,
    repositories::audit_log,
    state::AppState,
};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct AuditLogListQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuditEntryResponse {
    pub id: i64,
    pub entity_kind: EntityKind,
    pub entity_id: String,
    pub action: AuditAction,
    pub changes: Option<Value>,
    pub occurred_at: DateTime<Utc>,
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        Self {
            id: entry.id,
            entity_kind: entry.entity_kind,
            entity_id: entry.entity_id.to_string(),
            action: entry.action,
            changes: entry.changes.map(|value| value.0),
            occurred_at: entry.occurred_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuditLogListResponse {
    pub limit: i64,
    pub items: Vec<AuditEntryResponse>,
}

pub async fn list_audit_logs(
    State(state): State<AppState>,
    Query(q): Query<AuditLogListQuery>,
) -> Result<Json<AuditLogListResponse>, AppError> {
    let limit = q.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let entries = audit_log::list_entries(&state.pool, limit).await?;
    Ok(Json(AuditLogListResponse {
        limit,
        items: entries.into_iter().map(AuditEntryResponse::from).collect(),
    }))
}
