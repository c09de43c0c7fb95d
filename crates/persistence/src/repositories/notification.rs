//! Notification repository for database operations.

use domain::models::MAX_NOTIFICATIONS_PER_PAGE;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{NotificationEntity, NotificationKindDb};

/// Repository for notification database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification for a student.
    pub async fn create(
        &self,
        student_id: Uuid,
        template_key: &str,
        params: &Value,
        kind: NotificationKindDb,
    ) -> Result<NotificationEntity, sqlx::Error> {
        sqlx::query_as::<_, NotificationEntity>(
            r#"
            INSERT INTO notifications (student_id, template_key, params, kind)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, template_key, params, kind, is_read, created_at
            "#,
        )
        .bind(student_id)
        .bind(template_key)
        .bind(params)
        .bind(kind)
        .fetch_one(&self.pool)
        .await
    }

    /// List a student's notifications, newest first, capped.
    pub async fn list_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<Vec<NotificationEntity>, sqlx::Error> {
        sqlx::query_as::<_, NotificationEntity>(
            r#"
            SELECT id, student_id, template_key, params, kind, is_read, created_at
            FROM notifications
            WHERE student_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(student_id)
        .bind(MAX_NOTIFICATIONS_PER_PAGE)
        .fetch_all(&self.pool)
        .await
    }

    /// Mark a notification read. Idempotent: re-marking an already-read
    /// notification succeeds. Returns false when the id does not exist.
    pub async fn mark_read(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
