use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::entity::EntityKind,
    repositories::{audit_log, entity::EntityRepository},
    state::AppState,
};

use super::audit_logs::AuditEntryResponse;

/// Number of recent audit entries shown on the dashboard.
const RECENT_ACTIVITY_LIMIT: i64 = 10;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EntityCount {
    pub kind: EntityKind,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub counts: Vec<EntityCount>,
    pub recent_activity: Vec<AuditEntryResponse>,
}

/// Active-record counts per kind plus the latest audit activity.
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut counts = Vec::with_capacity(EntityKind::ALL.len());
    for kind in EntityKind::ALL {
        let count = EntityRepository::new(kind)
            .count_active(&state.pool)
            .await?;
        counts.push(EntityCount { kind, count });
    }

    let recent = audit_log::list_entries(&state.pool, RECENT_ACTIVITY_LIMIT).await?;
    Ok(Json(DashboardResponse {
        counts,
        recent_activity: recent.into_iter().map(AuditEntryResponse::from).collect(),
    }))
}
