//! Batch repository for database operations.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{BatchCatalogEntity, BatchEntity, BatchStatusDb, OpenBatchEntity};

/// Repository for batch database operations.
#[derive(Clone)]
pub struct BatchRepository {
    pool: PgPool,
}

impl BatchRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new batch under a course. New batches open as `active`.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: &str,
        course_id: Uuid,
        batch_name: &str,
        fees: i64,
        max_students: Option<i32>,
        start_date: Option<NaiveDate>,
    ) -> Result<BatchEntity, sqlx::Error> {
        sqlx::query_as::<_, BatchEntity>(
            r#"
            INSERT INTO batches (id, course_id, batch_name, fees, max_students, start_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'active')
            RETURNING id, course_id, batch_name, fees, max_students, start_date, status, created_at
            "#,
        )
        .bind(id)
        .bind(course_id)
        .bind(batch_name)
        .bind(fees)
        .bind(max_students)
        .bind(start_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Update name, fee and status of a batch.
    pub async fn update(
        &self,
        id: &str,
        batch_name: &str,
        fees: i64,
        status: BatchStatusDb,
    ) -> Result<Option<BatchEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatchEntity>(
            r#"
            UPDATE batches
            SET batch_name = $2, fees = $3, status = $4
            WHERE id = $1
            RETURNING id, course_id, batch_name, fees, max_students, start_date, status, created_at
            "#,
        )
        .bind(id)
        .bind(batch_name)
        .bind(fees)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find batch by its code.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<BatchEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatchEntity>(
            r#"
            SELECT id, course_id, batch_name, fees, max_students, start_date, status, created_at
            FROM batches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Admin catalog: all batches with course title and lesson count.
    pub async fn list_catalog(&self) -> Result<Vec<BatchCatalogEntity>, sqlx::Error> {
        sqlx::query_as::<_, BatchCatalogEntity>(
            r#"
            SELECT b.id, b.batch_name, c.title AS course_title, b.fees, b.status,
                   (SELECT COUNT(*) FROM lessons l WHERE l.batch_id = b.id) AS lesson_count,
                   b.created_at
            FROM batches b
            JOIN courses c ON b.course_id = c.id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Enrollable batches (`active` or `open`) with fees and seat usage,
    /// for the public list and the payment dropdown.
    pub async fn list_open(&self) -> Result<Vec<OpenBatchEntity>, sqlx::Error> {
        sqlx::query_as::<_, OpenBatchEntity>(
            r#"
            SELECT b.id, b.batch_name, c.title AS course_title, b.fees,
                   COUNT(e.id) AS current_students, b.max_students
            FROM batches b
            JOIN courses c ON b.course_id = c.id
            LEFT JOIN enrollments e ON e.batch_id = b.id
            WHERE b.status IN ('active', 'open')
            GROUP BY b.id, b.batch_name, c.title, b.fees, b.max_students
            ORDER BY c.title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
