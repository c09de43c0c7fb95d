//! Student entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::Student;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the students table.
#[derive(Debug, Clone, FromRow)]
pub struct StudentEntity {
    pub id: Uuid,
    pub name: String,
    pub phone_primary: String,
    pub phone_secondary: Option<String>,
    pub password_hash: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<StudentEntity> for Student {
    fn from(entity: StudentEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            phone_primary: entity.phone_primary,
            phone_secondary: entity.phone_secondary,
            password_hash: entity.password_hash,
            date_of_birth: entity.date_of_birth,
            address: entity.address,
            profile_image_url: entity.profile_image_url,
            created_at: entity.created_at,
        }
    }
}
