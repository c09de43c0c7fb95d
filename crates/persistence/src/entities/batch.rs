//! Batch entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Batch, BatchCatalogEntry, BatchStatus, OpenBatch};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapped to the PostgreSQL `batch_status` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "batch_status", rename_all = "lowercase")]
pub enum BatchStatusDb {
    Active,
    Open,
    Closed,
}

impl From<BatchStatusDb> for BatchStatus {
    fn from(db: BatchStatusDb) -> Self {
        match db {
            BatchStatusDb::Active => BatchStatus::Active,
            BatchStatusDb::Open => BatchStatus::Open,
            BatchStatusDb::Closed => BatchStatus::Closed,
        }
    }
}

impl From<BatchStatus> for BatchStatusDb {
    fn from(status: BatchStatus) -> Self {
        match status {
            BatchStatus::Active => BatchStatusDb::Active,
            BatchStatus::Open => BatchStatusDb::Open,
            BatchStatus::Closed => BatchStatusDb::Closed,
        }
    }
}

/// Database row mapping for the batches table.
#[derive(Debug, Clone, FromRow)]
pub struct BatchEntity {
    pub id: String,
    pub course_id: Uuid,
    pub batch_name: String,
    pub fees: i64,
    pub max_students: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub status: BatchStatusDb,
    pub created_at: DateTime<Utc>,
}

impl From<BatchEntity> for Batch {
    fn from(entity: BatchEntity) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            batch_name: entity.batch_name,
            fees: entity.fees,
            max_students: entity.max_students,
            start_date: entity.start_date,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

/// Batch joined with course title and lesson count, for the admin catalog.
#[derive(Debug, Clone, FromRow)]
pub struct BatchCatalogEntity {
    pub id: String,
    pub batch_name: String,
    pub course_title: String,
    pub fees: i64,
    pub status: BatchStatusDb,
    pub lesson_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<BatchCatalogEntity> for BatchCatalogEntry {
    fn from(entity: BatchCatalogEntity) -> Self {
        Self {
            id: entity.id,
            batch_name: entity.batch_name,
            course_title: entity.course_title,
            fees: entity.fees,
            status: entity.status.into(),
            lesson_count: entity.lesson_count,
            created_at: entity.created_at,
        }
    }
}

/// Enrollable batch with seat usage, for the public list.
#[derive(Debug, Clone, FromRow)]
pub struct OpenBatchEntity {
    pub id: String,
    pub batch_name: String,
    pub course_title: String,
    pub fees: i64,
    pub current_students: i64,
    pub max_students: Option<i32>,
}

impl From<OpenBatchEntity> for OpenBatch {
    fn from(entity: OpenBatchEntity) -> Self {
        let is_full = entity
            .max_students
            .is_some_and(|max| entity.current_students >= max as i64);

        Self {
            id: entity.id,
            batch_name: entity.batch_name,
            course_title: entity.course_title,
            fees: entity.fees,
            current_students: entity.current_students,
            max_students: entity.max_students,
            is_full,
        }
    }
}
