//! Course repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CourseEntity;

/// Repository for course database operations.
#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new course.
    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<CourseEntity, sqlx::Error> {
        sqlx::query_as::<_, CourseEntity>(
            r#"
            INSERT INTO courses (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    /// Find course by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CourseEntity>, sqlx::Error> {
        sqlx::query_as::<_, CourseEntity>(
            "SELECT id, title, description, created_at FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// List all courses alphabetically.
    pub async fn list(&self) -> Result<Vec<CourseEntity>, sqlx::Error> {
        sqlx::query_as::<_, CourseEntity>(
            "SELECT id, title, description, created_at FROM courses ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
