//! Payment entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{AdminPaymentRow, Payment, PaymentStatus, StudentPaymentRow};
use sqlx::FromRow;
use uuid::Uuid;

use super::enrollment::EnrollmentStatusDb;

/// Database enum mapped to the PostgreSQL `payment_status` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatusDb {
    Pending,
    Verified,
    Rejected,
}

impl From<PaymentStatusDb> for PaymentStatus {
    fn from(db: PaymentStatusDb) -> Self {
        match db {
            PaymentStatusDb::Pending => PaymentStatus::Pending,
            PaymentStatusDb::Verified => PaymentStatus::Verified,
            PaymentStatusDb::Rejected => PaymentStatus::Rejected,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDb {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => PaymentStatusDb::Pending,
            PaymentStatus::Verified => PaymentStatusDb::Verified,
            PaymentStatus::Rejected => PaymentStatusDb::Rejected,
        }
    }
}

/// Database row mapping for the payments table.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub amount: i64,
    pub payment_method: String,
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatusDb,
    pub payment_date: DateTime<Utc>,
}

impl From<PaymentEntity> for Payment {
    fn from(entity: PaymentEntity) -> Self {
        Self {
            id: entity.id,
            enrollment_id: entity.enrollment_id,
            amount: entity.amount,
            payment_method: entity.payment_method,
            transaction_ref: entity.transaction_ref,
            receipt_url: entity.receipt_url,
            status: entity.status.into(),
            payment_date: entity.payment_date,
        }
    }
}

/// Payment joined with student/batch/course names, for the admin queue.
#[derive(Debug, Clone, FromRow)]
pub struct AdminPaymentRowEntity {
    pub id: Uuid,
    pub student_name: String,
    pub phone_primary: String,
    pub course_title: String,
    pub batch_name: String,
    pub amount: i64,
    pub payment_method: String,
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatusDb,
    pub payment_date: DateTime<Utc>,
}

impl From<AdminPaymentRowEntity> for AdminPaymentRow {
    fn from(entity: AdminPaymentRowEntity) -> Self {
        Self {
            id: entity.id,
            student_name: entity.student_name,
            phone_primary: entity.phone_primary,
            course_title: entity.course_title,
            batch_name: entity.batch_name,
            amount: entity.amount,
            payment_method: entity.payment_method,
            transaction_ref: entity.transaction_ref,
            receipt_url: entity.receipt_url,
            status: entity.status.into(),
            payment_date: entity.payment_date,
        }
    }
}

/// Student payment history row with enrollment context.
#[derive(Debug, Clone, FromRow)]
pub struct StudentPaymentRowEntity {
    pub id: Uuid,
    pub course_title: String,
    pub batch_id: String,
    pub batch_name: String,
    pub amount: i64,
    pub payment_method: String,
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatusDb,
    pub payment_date: DateTime<Utc>,
    pub enrollment_status: EnrollmentStatusDb,
    pub expire_date: DateTime<Utc>,
}

impl From<StudentPaymentRowEntity> for StudentPaymentRow {
    fn from(entity: StudentPaymentRowEntity) -> Self {
        Self {
            id: entity.id,
            course_title: entity.course_title,
            batch_id: entity.batch_id,
            batch_name: entity.batch_name,
            amount: entity.amount,
            payment_method: entity.payment_method,
            transaction_ref: entity.transaction_ref,
            receipt_url: entity.receipt_url,
            status: entity.status.into(),
            payment_date: entity.payment_date,
            enrollment_status: entity.enrollment_status.into(),
            expire_date: entity.expire_date,
        }
    }
}
