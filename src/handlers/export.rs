use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue,
    },
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppError,
    models::entity::EntityRecord,
    repositories::entity::{EntityRepository, ListFilters},
    state::AppState,
    utils::{csv::csv_document, time},
};

use super::common::parse_entity_kind;

#[derive(Debug, Deserialize, Serialize, IntoParams, ToSchema)]
pub struct ExportQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn parse(raw: &str) -> Result<Self, AppError> {
        match raw {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::BadRequest(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Exported row shape: the record fields with `is_active` stripped.
#[derive(Debug, Serialize)]
struct ExportRow {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EntityRecord> for ExportRow {
    fn from(record: EntityRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

pub async fn export_entities(
    State(state): State<AppState>,
    Path((kind, format)): Path<(String, String)>,
    Query(q): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let kind = parse_entity_kind(&kind)?;
    let format = ExportFormat::parse(&format)?;
    let days = q.days.filter(|days| *days > 0);

    let repo = EntityRepository::new(kind);
    let filters = ListFilters {
        days,
        search: None,
        page: 1,
    };
    let (records, _) = repo.list(&state.pool, &filters).await?;
    let rows: Vec<ExportRow> = records.into_iter().map(ExportRow::from).collect();

    let body = match format {
        ExportFormat::Csv => {
            let data: Vec<Vec<String>> = rows
                .into_iter()
                .map(|row| {
                    vec![
                        row.id,
                        row.name,
                        row.created_at.to_rfc3339(),
                        row.updated_at.to_rfc3339(),
                    ]
                })
                .collect();
            csv_document(&["id", "name", "created_at", "updated_at"], &data).into_bytes()
        }
        ExportFormat::Json => {
            serde_json::to_vec_pretty(&rows).map_err(|e| AppError::InternalServerError(e.into()))?
        }
    };

    let filename = format!(
        "{}_{}.{}",
        kind.as_str(),
        time::filename_stamp(&state.config.time_zone),
        format.extension()
    );
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static(format.content_type()),
    );
    response.headers_mut().insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
            .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
    );
    Ok(response)
}
