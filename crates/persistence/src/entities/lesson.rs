//! Lesson entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Lesson;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the lessons table.
#[derive(Debug, Clone, FromRow)]
pub struct LessonEntity {
    pub id: Uuid,
    pub batch_id: String,
    pub title: String,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<LessonEntity> for Lesson {
    fn from(entity: LessonEntity) -> Self {
        Self {
            id: entity.id,
            batch_id: entity.batch_id,
            title: entity.title,
            video_url: entity.video_url,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
