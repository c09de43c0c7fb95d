//! Exam result repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ExamResultEntity, ExamResultRowEntity};

/// Repository for exam result database operations.
#[derive(Clone)]
pub struct ExamResultRepository {
    pool: PgPool,
}

impl ExamResultRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record an exam result against an enrollment.
    pub async fn create(
        &self,
        enrollment_id: Uuid,
        exam_title: &str,
        marks_obtained: i32,
        total_marks: i32,
        grade: Option<&str>,
    ) -> Result<ExamResultEntity, sqlx::Error> {
        sqlx::query_as::<_, ExamResultEntity>(
            r#"
            INSERT INTO exam_results (enrollment_id, exam_title, marks_obtained, total_marks, grade)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, enrollment_id, exam_title, marks_obtained, total_marks, grade, result_date
            "#,
        )
        .bind(enrollment_id)
        .bind(exam_title)
        .bind(marks_obtained)
        .bind(total_marks)
        .bind(grade)
        .fetch_one(&self.pool)
        .await
    }

    /// All results with student and batch names (admin view).
    pub async fn list_all(&self) -> Result<Vec<ExamResultRowEntity>, sqlx::Error> {
        sqlx::query_as::<_, ExamResultRowEntity>(
            r#"
            SELECT er.id, s.name AS student_name, c.title AS course_title, b.batch_name,
                   er.exam_title, er.marks_obtained, er.total_marks, er.grade, er.result_date
            FROM exam_results er
            JOIN enrollments e ON er.enrollment_id = e.id
            JOIN students s ON e.student_id = s.id
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            ORDER BY er.result_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// One student's results across enrollments, newest first.
    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<ExamResultRowEntity>, sqlx::Error> {
        sqlx::query_as::<_, ExamResultRowEntity>(
            r#"
            SELECT er.id, s.name AS student_name, c.title AS course_title, b.batch_name,
                   er.exam_title, er.marks_obtained, er.total_marks, er.grade, er.result_date
            FROM exam_results er
            JOIN enrollments e ON er.enrollment_id = e.id
            JOIN students s ON e.student_id = s.id
            JOIN batches b ON e.batch_id = b.id
            JOIN courses c ON b.course_id = c.id
            WHERE e.student_id = $1
            ORDER BY er.result_date DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
    }
}
