use crate::types::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

/// The five record categories managed by this service.
///
/// Each kind is backed by its own table; all tables share one schema.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EntityKind {
    Employees,
    Levels,
    Areas,
    PartNumbers,
    Calibrations,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Employees,
        EntityKind::Levels,
        EntityKind::Areas,
        EntityKind::PartNumbers,
        EntityKind::Calibrations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Employees => "employees",
            EntityKind::Levels => "levels",
            EntityKind::Areas => "areas",
            EntityKind::PartNumbers => "partnumbers",
            EntityKind::Calibrations => "calibrations",
        }
    }

    /// Table backing this kind. The mapping is closed: queries never
    /// interpolate caller-supplied strings into SQL.
    pub fn table(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employees" => Ok(EntityKind::Employees),
            "levels" => Ok(EntityKind::Levels),
            "areas" => Ok(EntityKind::Areas),
            "partnumbers" => Ok(EntityKind::PartNumbers),
            "calibrations" => Ok(EntityKind::Calibrations),
            _ => Err(()),
        }
    }
}

/// One row of any entity table.
///
/// Records are soft-deleted: `is_active = false` hides the row from every
/// read path but keeps it in storage.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EntityRecord {
    pub id: EntityId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEntityPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEntityPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
