//! Exam results recorded against an enrollment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExamResult {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub exam_title: String,
    pub marks_obtained: i32,
    pub total_marks: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub result_date: DateTime<Utc>,
}

/// Exam result joined with student and batch names, for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ExamResultRow {
    pub id: Uuid,
    pub student_name: String,
    pub course_title: String,
    pub batch_name: String,
    pub exam_title: String,
    pub marks_obtained: i32,
    pub total_marks: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub result_date: DateTime<Utc>,
}

/// Request to record an exam result (admin).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RecordExamResultRequest {
    pub enrollment_id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Exam title is required"))]
    pub exam_title: String,

    #[validate(range(min = 0, message = "Marks must be non-negative"))]
    pub marks_obtained: i32,

    #[validate(range(min = 1, message = "Total marks must be positive"))]
    pub total_marks: i32,

    pub grade: Option<String>,
}
