//! Comment repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{CommentEntity, CommentRoleDb};

/// Repository for lesson comment database operations.
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Post a comment under a lesson.
    pub async fn create(
        &self,
        lesson_id: Uuid,
        author_name: &str,
        author_role: CommentRoleDb,
        message: &str,
    ) -> Result<CommentEntity, sqlx::Error> {
        sqlx::query_as::<_, CommentEntity>(
            r#"
            INSERT INTO comments (lesson_id, author_name, author_role, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, lesson_id, author_name, author_role, message, created_at
            "#,
        )
        .bind(lesson_id)
        .bind(author_name)
        .bind(author_role)
        .bind(message)
        .fetch_one(&self.pool)
        .await
    }

    /// Thread view: all comments of a lesson in posting order.
    pub async fn list_for_lesson(&self, lesson_id: Uuid) -> Result<Vec<CommentEntity>, sqlx::Error> {
        sqlx::query_as::<_, CommentEntity>(
            r#"
            SELECT id, lesson_id, author_name, author_role, message, created_at
            FROM comments
            WHERE lesson_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(lesson_id)
        .fetch_all(&self.pool)
        .await
    }
}
