//! Enrollment entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{Enrollment, EnrollmentStatus, EnrollmentSummary};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapped to the PostgreSQL `enrollment_status` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "enrollment_status", rename_all = "lowercase")]
pub enum EnrollmentStatusDb {
    Pending,
    Active,
    Rejected,
}

impl From<EnrollmentStatusDb> for EnrollmentStatus {
    fn from(db: EnrollmentStatusDb) -> Self {
        match db {
            EnrollmentStatusDb::Pending => EnrollmentStatus::Pending,
            EnrollmentStatusDb::Active => EnrollmentStatus::Active,
            EnrollmentStatusDb::Rejected => EnrollmentStatus::Rejected,
        }
    }
}

impl From<EnrollmentStatus> for EnrollmentStatusDb {
    fn from(status: EnrollmentStatus) -> Self {
        match status {
            EnrollmentStatus::Pending => EnrollmentStatusDb::Pending,
            EnrollmentStatus::Active => EnrollmentStatusDb::Active,
            EnrollmentStatus::Rejected => EnrollmentStatusDb::Rejected,
        }
    }
}

/// Database row mapping for the enrollments table.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub batch_id: String,
    pub status: EnrollmentStatusDb,
    pub joined_at: NaiveDate,
    pub expire_date: DateTime<Utc>,
}

impl From<EnrollmentEntity> for Enrollment {
    fn from(entity: EnrollmentEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            batch_id: entity.batch_id,
            status: entity.status.into(),
            joined_at: entity.joined_at,
            expire_date: entity.expire_date,
        }
    }
}

/// Enrollment joined with batch and course names.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentSummaryEntity {
    pub id: Uuid,
    pub batch_id: String,
    pub batch_name: String,
    pub course_title: String,
    pub status: EnrollmentStatusDb,
    pub joined_at: NaiveDate,
    pub expire_date: DateTime<Utc>,
}

impl From<EnrollmentSummaryEntity> for EnrollmentSummary {
    fn from(entity: EnrollmentSummaryEntity) -> Self {
        Self {
            id: entity.id,
            batch_id: entity.batch_id,
            batch_name: entity.batch_name,
            course_title: entity.course_title,
            status: entity.status.into(),
            joined_at: entity.joined_at,
            expire_date: entity.expire_date,
        }
    }
}
