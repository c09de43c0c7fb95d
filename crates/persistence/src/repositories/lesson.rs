//! Lesson repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LessonEntity;

/// Repository for lesson database operations.
#[derive(Clone)]
pub struct LessonRepository {
    pool: PgPool,
}

impl LessonRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add a lesson to a batch. The video URL comes from the media store.
    pub async fn create(
        &self,
        batch_id: &str,
        title: &str,
        video_url: Option<&str>,
        description: Option<&str>,
    ) -> Result<LessonEntity, sqlx::Error> {
        sqlx::query_as::<_, LessonEntity>(
            r#"
            INSERT INTO lessons (batch_id, title, video_url, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, batch_id, title, video_url, description, created_at
            "#,
        )
        .bind(batch_id)
        .bind(title)
        .bind(video_url)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    /// List lessons of a batch in creation order.
    pub async fn list_for_batch(&self, batch_id: &str) -> Result<Vec<LessonEntity>, sqlx::Error> {
        sqlx::query_as::<_, LessonEntity>(
            r#"
            SELECT id, batch_id, title, video_url, description, created_at
            FROM lessons
            WHERE batch_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(batch_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Delete a lesson (comments cascade). Returns false when missing.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
