#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        audit_logs::{AuditEntryResponse, AuditLogListQuery, AuditLogListResponse},
        dashboard::{DashboardResponse, EntityCount},
        entities::{EntityListQuery, EntityListResponse},
        export::ExportQuery,
    },
    models::{
        audit_log::AuditAction,
        entity::{CreateEntityPayload, EntityKind, EntityRecord, UpdateEntityPayload},
    },
    types::EntityId,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_entities_doc,
        create_entity_doc,
        get_entity_doc,
        update_entity_doc,
        delete_entity_doc,
        export_entities_doc,
        dashboard_doc,
        audit_logs_doc
    ),
    components(
        schemas(
            EntityId,
            EntityKind,
            EntityRecord,
            CreateEntityPayload,
            UpdateEntityPayload,
            EntityListQuery,
            EntityListResponse,
            ExportQuery,
            AuditAction,
            AuditEntryResponse,
            AuditLogListQuery,
            AuditLogListResponse,
            EntityCount,
            DashboardResponse
        )
    ),
    tags(
        (name = "Entities", description = "Generic CRUD over the five entity tables"),
        (name = "Reports", description = "Dashboard counts, audit trail and exports")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/entities/{kind}",
    params(
        ("kind" = String, Path, description = "Entity kind (employees, levels, areas, partnumbers, calibrations)"),
        EntityListQuery
    ),
    responses(
        (status = 200, description = "One page of active records", body = EntityListResponse),
        (status = 400, description = "Unknown entity kind or bad filter")
    ),
    tag = "Entities"
)]
fn list_entities_doc() {}

#[utoipa::path(
    post,
    path = "/api/entities/{kind}",
    params(("kind" = String, Path, description = "Entity kind")),
    request_body = CreateEntityPayload,
    responses(
        (status = 201, description = "Record created", body = EntityRecord),
        (status = 400, description = "Unknown entity kind or empty name")
    ),
    tag = "Entities"
)]
fn create_entity_doc() {}

#[utoipa::path(
    get,
    path = "/api/entities/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Entity kind"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "The active record", body = EntityRecord),
        (status = 404, description = "No active record with this id")
    ),
    tag = "Entities"
)]
fn get_entity_doc() {}

#[utoipa::path(
    put,
    path = "/api/entities/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Entity kind"),
        ("id" = String, Path, description = "Record id")
    ),
    request_body = UpdateEntityPayload,
    responses(
        (status = 200, description = "Record updated", body = EntityRecord),
        (status = 404, description = "No active record with this id")
    ),
    tag = "Entities"
)]
fn update_entity_doc() {}

#[utoipa::path(
    delete,
    path = "/api/entities/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Entity kind"),
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 204, description = "Record soft-deleted"),
        (status = 404, description = "No active record with this id")
    ),
    tag = "Entities"
)]
fn delete_entity_doc() {}

#[utoipa::path(
    get,
    path = "/api/entities/{kind}/export/{format}",
    params(
        ("kind" = String, Path, description = "Entity kind"),
        ("format" = String, Path, description = "csv or json"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "Download of the first result page"),
        (status = 400, description = "Unknown entity kind or format")
    ),
    tag = "Reports"
)]
fn export_entities_doc() {}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses((status = 200, description = "Active counts and recent activity", body = DashboardResponse)),
    tag = "Reports"
)]
fn dashboard_doc() {}

#[utoipa::path(
    get,
    path = "/api/audit-logs",
    params(AuditLogListQuery),
    responses((status = 200, description = "Most recent audit entries", body = AuditLogListResponse)),
    tag = "Reports"
)]
fn audit_logs_doc() {}
