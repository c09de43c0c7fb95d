//! Batch (scheduled course offering) model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_amount, validate_batch_code};
use uuid::Uuid;
use validator::Validate;

/// Batch lifecycle status. `Active` and `Open` batches accept enrollments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Active,
    Open,
    Closed,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Active => "active",
            BatchStatus::Open => "open",
            BatchStatus::Closed => "closed",
        }
    }

    /// Whether the batch is shown in the payment dropdown.
    pub fn accepts_enrollments(&self) -> bool {
        matches!(self, BatchStatus::Active | BatchStatus::Open)
    }
}

/// A scheduled offering of a course, identified by a human-entered code
/// such as `C1-B1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Batch {
    pub id: String,
    pub course_id: Uuid,
    pub batch_name: String,
    pub fees: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_students: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub status: BatchStatus,
    pub created_at: DateTime<Utc>,
}

/// Batch joined with its course title, for the admin catalog view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchCatalogEntry {
    pub id: String,
    pub batch_name: String,
    pub course_title: String,
    pub fees: i64,
    pub status: BatchStatus,
    pub lesson_count: i64,
    pub created_at: DateTime<Utc>,
}

/// An enrollable batch with fee and remaining-seat information, for the
/// public course list and the payment dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OpenBatch {
    pub id: String,
    pub batch_name: String,
    pub course_title: String,
    pub fees: i64,
    pub current_students: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_students: Option<i32>,
    pub is_full: bool,
}

/// Request to create a batch (admin).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateBatchRequest {
    #[validate(custom(function = "validate_batch_code"))]
    pub id: String,

    pub course_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Batch name must be 1-255 characters"))]
    pub batch_name: String,

    #[validate(custom(function = "validate_amount"))]
    pub fees: i64,

    #[validate(range(min = 1, message = "max_students must be at least 1"))]
    pub max_students: Option<i32>,

    pub start_date: Option<NaiveDate>,
}

/// Request to update a batch (admin).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateBatchRequest {
    #[validate(length(min = 1, max = 255, message = "Batch name must be 1-255 characters"))]
    pub batch_name: String,

    #[validate(custom(function = "validate_amount"))]
    pub fees: i64,

    pub status: BatchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(BatchStatus::Active.as_str(), "active");
        assert_eq!(BatchStatus::Open.as_str(), "open");
        assert_eq!(BatchStatus::Closed.as_str(), "closed");
    }

    #[test]
    fn test_enrollable_statuses() {
        assert!(BatchStatus::Active.accepts_enrollments());
        assert!(BatchStatus::Open.accepts_enrollments());
        assert!(!BatchStatus::Closed.accepts_enrollments());
    }

    #[test]
    fn test_create_batch_rejects_zero_fee() {
        let req = CreateBatchRequest {
            id: "C1-B1".into(),
            course_id: Uuid::new_v4(),
            batch_name: "Batch 1".into(),
            fees: 0,
            max_students: None,
            start_date: None,
        };
        assert!(req.validate().is_err());
    }
}
