//! Generic entity repository.
//!
//! One repository instance is bound to a single [`EntityKind`] at
//! construction. Every mutation appends its audit entry inside the same
//! transaction, so a record change and its trail commit or fail together.

use chrono::{Duration, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::audit_log::AuditAction;
use crate::models::entity::{EntityKind, EntityRecord};
use crate::repositories::audit_log;
use crate::types::EntityId;

/// Fixed page size for all entity listings.
pub const PAGE_SIZE: i64 = 20;

const SELECT_COLUMNS: &str = "id, name, created_at, updated_at, is_active";

/// Filters accepted by [`EntityRepository::list`].
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    /// Only records created within the last N days, measured from now.
    pub days: Option<i64>,
    /// Substring match against `name`.
    pub search: Option<String>,
    /// 1-indexed page. Values below 1 are treated as page 1.
    pub page: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityRepository {
    kind: EntityKind,
}

impl EntityRepository {
    pub fn new(kind: EntityKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    fn base_select(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE is_active = 1",
            SELECT_COLUMNS,
            self.kind.table()
        )
    }

    /// Returns one page of active records plus the total count matching the
    /// same filters. The count is computed server-side over the identical
    /// predicate, so the two stay consistent regardless of the requested
    /// page; a page past the end yields an empty slice with the real total.
    pub async fn list(
        &self,
        db: &SqlitePool,
        filters: &ListFilters,
    ) -> Result<(Vec<EntityRecord>, i64), AppError> {
        let mut count_builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT COUNT(*) FROM {} WHERE is_active = 1",
            self.kind.table()
        ));
        apply_filters(&mut count_builder, filters);
        let total = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(db)
            .await?;

        let page = filters.page.max(1);
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(self.base_select());
        apply_filters(&mut builder, filters);
        builder.push(" ORDER BY created_at DESC, id DESC");
        builder
            .push(" LIMIT ")
            .push_bind(PAGE_SIZE)
            .push(" OFFSET ")
            .push_bind((page - 1) * PAGE_SIZE);

        let items = builder
            .build_query_as::<EntityRecord>()
            .fetch_all(db)
            .await?;

        Ok((items, total))
    }

    /// Returns the active record with this id.
    pub async fn find_by_id(
        &self,
        db: &SqlitePool,
        id: &EntityId,
    ) -> Result<Option<EntityRecord>, AppError> {
        let query = format!("{} AND id = ?", self.base_select());
        let row = sqlx::query_as::<_, EntityRecord>(&query)
            .bind(id.as_str())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    /// Inserts a record and its CREATE audit entry in one transaction.
    /// Returns the row as stored, read back after the insert.
    pub async fn create(&self, db: &SqlitePool, name: &str) -> Result<EntityRecord, AppError> {
        let id = EntityId::new();
        let now = Utc::now();

        let mut tx = db.begin().await?;
        let query = format!(
            "INSERT INTO {} (id, name, created_at, updated_at, is_active) \
             VALUES (?, ?, ?, ?, 1) \
             RETURNING {}",
            self.kind.table(),
            SELECT_COLUMNS
        );
        let record = sqlx::query_as::<_, EntityRecord>(&query)
            .bind(id.as_str())
            .bind(name)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        audit_log::record_entry(
            &mut tx,
            self.kind,
            &id,
            AuditAction::Create,
            Some(serde_json::json!({ "name": name })),
        )
        .await?;
        tx.commit().await?;

        Ok(record)
    }

    /// Renames a record and refreshes `updated_at`, recording an UPDATE
    /// audit entry with the previous and new name. Returns `None` without
    /// side effects when no active record matches.
    pub async fn update(
        &self,
        db: &SqlitePool,
        id: &EntityId,
        name: &str,
    ) -> Result<Option<EntityRecord>, AppError> {
        let mut tx = db.begin().await?;

        // The previous name is read in the same transaction as the write,
        // so the audit entry cannot observe the value being written.
        let select = format!(
            "SELECT name FROM {} WHERE id = ? AND is_active = 1",
            self.kind.table()
        );
        let old_name: Option<String> = sqlx::query_scalar(&select)
            .bind(id.as_str())
            .fetch_optional(&mut *tx)
            .await?;
        let Some(old_name) = old_name else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE {} SET name = ?, updated_at = ? WHERE id = ? RETURNING {}",
            self.kind.table(),
            SELECT_COLUMNS
        );
        let record = sqlx::query_as::<_, EntityRecord>(&query)
            .bind(name)
            .bind(Utc::now())
            .bind(id.as_str())
            .fetch_one(&mut *tx)
            .await?;

        audit_log::record_entry(
            &mut tx,
            self.kind,
            id,
            AuditAction::Update,
            Some(serde_json::json!({ "old": old_name, "new": name })),
        )
        .await?;
        tx.commit().await?;

        Ok(Some(record))
    }

    /// Soft-deletes a record: flips `is_active` off and refreshes
    /// `updated_at`, only when the record is currently active. Returns
    /// whether a row was affected; deleting an inactive or unknown id is a
    /// no-op reported as `false`, with no audit entry.
    pub async fn delete(&self, db: &SqlitePool, id: &EntityId) -> Result<bool, AppError> {
        let mut tx = db.begin().await?;
        let query = format!(
            "UPDATE {} SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
            self.kind.table()
        );
        let affected = sqlx::query(&query)
            .bind(Utc::now())
            .bind(id.as_str())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if affected == 0 {
            return Ok(false);
        }

        audit_log::record_entry(&mut tx, self.kind, id, AuditAction::Delete, None).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Number of active records of this kind.
    pub async fn count_active(&self, db: &SqlitePool) -> Result<i64, AppError> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE is_active = 1",
            self.kind.table()
        );
        let count = sqlx::query_scalar::<_, i64>(&query).fetch_one(db).await?;
        Ok(count)
    }
}

fn apply_filters(builder: &mut QueryBuilder<'_, Sqlite>, filters: &ListFilters) {
    if let Some(days) = filters.days {
        let cutoff = Utc::now() - Duration::days(days);
        builder.push(" AND created_at >= ").push_bind(cutoff);
    }
    if let Some(search) = filters.search.as_ref() {
        builder
            .push(" AND name LIKE ")
            .push_bind(format!("%{}%", search));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_targets_the_kind_table() {
        let repo = EntityRepository::new(EntityKind::PartNumbers);
        assert_eq!(repo.kind(), EntityKind::PartNumbers);
        assert!(repo.base_select().contains("FROM partnumbers"));
    }

    #[test]
    fn list_filters_default_to_no_restriction() {
        let filters = ListFilters::default();
        assert!(filters.days.is_none());
        assert!(filters.search.is_none());
    }
}
