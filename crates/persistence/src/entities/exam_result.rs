//! Exam result entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{ExamResult, ExamResultRow};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the exam_results table.
#[derive(Debug, Clone, FromRow)]
pub struct ExamResultEntity {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub exam_title: String,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub grade: Option<String>,
    pub result_date: DateTime<Utc>,
}

impl From<ExamResultEntity> for ExamResult {
    fn from(entity: ExamResultEntity) -> Self {
        Self {
            id: entity.id,
            enrollment_id: entity.enrollment_id,
            exam_title: entity.exam_title,
            marks_obtained: entity.marks_obtained,
            total_marks: entity.total_marks,
            grade: entity.grade,
            result_date: entity.result_date,
        }
    }
}

/// Exam result joined with student and batch names.
#[derive(Debug, Clone, FromRow)]
pub struct ExamResultRowEntity {
    pub id: Uuid,
    pub student_name: String,
    pub course_title: String,
    pub batch_name: String,
    pub exam_title: String,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub grade: Option<String>,
    pub result_date: DateTime<Utc>,
}

impl From<ExamResultRowEntity> for ExamResultRow {
    fn from(entity: ExamResultRowEntity) -> Self {
        Self {
            id: entity.id,
            student_name: entity.student_name,
            course_title: entity.course_title,
            batch_name: entity.batch_name,
            exam_title: entity.exam_title,
            marks_obtained: entity.marks_obtained,
            total_marks: entity.total_marks,
            grade: entity.grade,
            result_date: entity.result_date,
        }
    }
}
