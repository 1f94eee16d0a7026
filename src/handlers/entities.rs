use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppError,
    models::entity::{CreateEntityPayload, EntityRecord, UpdateEntityPayload},
    repositories::entity::{EntityRepository, ListFilters, PAGE_SIZE},
    state::AppState,
    types::EntityId,
};

use super::common::{normalize_filter, parse_entity_kind};

const DEFAULT_PAGE: i64 = 1;
const MAX_PAGE: i64 = 1_000;

#[derive(Debug, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct EntityListQuery {
    pub days: Option<i64>,
    pub search: Option<String>,
    pub page: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EntityListResponse {
    pub page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub items: Vec<EntityRecord>,
}

pub async fn list_entities(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(q): Query<EntityListQuery>,
) -> Result<Json<EntityListResponse>, AppError> {
    let kind = parse_entity_kind(&kind)?;
    let filters = build_filters(q)?;
    let page = filters.page;

    let repo = EntityRepository::new(kind);
    let (items, total) = repo.list(&state.pool, &filters).await?;

    Ok(Json(EntityListResponse {
        page,
        total,
        total_pages: total_pages(total),
        items,
    }))
}

pub async fn get_entity(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<EntityRecord>, AppError> {
    let kind = parse_entity_kind(&kind)?;
    let repo = EntityRepository::new(kind);
    let record = repo
        .find_by_id(&state.pool, &EntityId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;
    Ok(Json(record))
}

pub async fn create_entity(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(payload): Json<CreateEntityPayload>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_entity_kind(&kind)?;
    payload.validate()?;

    let repo = EntityRepository::new(kind);
    // The boundary trims; the repository stores whatever it is handed.
    let record = repo.create(&state.pool, payload.name.trim()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_entity(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Json(payload): Json<UpdateEntityPayload>,
) -> Result<Json<EntityRecord>, AppError> {
    let kind = parse_entity_kind(&kind)?;
    payload.validate()?;

    let repo = EntityRepository::new(kind);
    let record = repo
        .update(&state.pool, &EntityId::from(id), payload.name.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;
    Ok(Json(record))
}

pub async fn delete_entity(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let kind = parse_entity_kind(&kind)?;
    let repo = EntityRepository::new(kind);
    let deleted = repo.delete(&state.pool, &EntityId::from(id)).await?;
    if !deleted {
        return Err(AppError::NotFound("Item not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn build_filters(q: EntityListQuery) -> Result<ListFilters, AppError> {
    let page = q.page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
    let days = match q.days {
        Some(days) if days < 1 => {
            return Err(AppError::BadRequest(
                "`days` must be a positive number of days".into(),
            ))
        }
        other => other,
    };
    Ok(ListFilters {
        days,
        search: normalize_filter(q.search),
        page,
    })
}

fn total_pages(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(20), 1);
        assert_eq!(total_pages(21), 2);
        assert_eq!(total_pages(25), 2);
    }

    #[test]
    fn build_filters_clamps_page() {
        let filters = build_filters(EntityListQuery {
            days: None,
            search: None,
            page: Some(-3),
        })
        .expect("filters");
        assert_eq!(filters.page, 1);

        let filters = build_filters(EntityListQuery {
            days: None,
            search: None,
            page: None,
        })
        .expect("filters");
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn build_filters_rejects_non_positive_days() {
        let result = build_filters(EntityListQuery {
            days: Some(0),
            search: None,
            page: None,
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn build_filters_drops_blank_search() {
        let filters = build_filters(EntityListQuery {
            days: Some(7),
            search: Some("  ".into()),
            page: Some(2),
        })
        .expect("filters");
        assert_eq!(filters.days, Some(7));
        assert!(filters.search.is_none());
        assert_eq!(filters.page, 2);
    }
}
