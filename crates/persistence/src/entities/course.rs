//! Course entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Course;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the courses table.
#[derive(Debug, Clone, FromRow)]
pub struct CourseEntity {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CourseEntity> for Course {
    fn from(entity: CourseEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
        }
    }
}
