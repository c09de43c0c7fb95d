//! Comment entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Comment, CommentRole};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapped to the PostgreSQL `comment_role` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "comment_role", rename_all = "lowercase")]
pub enum CommentRoleDb {
    Student,
    Admin,
}

impl From<CommentRoleDb> for CommentRole {
    fn from(db: CommentRoleDb) -> Self {
        match db {
            CommentRoleDb::Student => CommentRole::Student,
            CommentRoleDb::Admin => CommentRole::Admin,
        }
    }
}

impl From<CommentRole> for CommentRoleDb {
    fn from(role: CommentRole) -> Self {
        match role {
            CommentRole::Student => CommentRoleDb::Student,
            CommentRole::Admin => CommentRoleDb::Admin,
        }
    }
}

/// Database row mapping for the comments table.
#[derive(Debug, Clone, FromRow)]
pub struct CommentEntity {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub author_name: String,
    pub author_role: CommentRoleDb,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentEntity> for Comment {
    fn from(entity: CommentEntity) -> Self {
        Self {
            id: entity.id,
            lesson_id: entity.lesson_id,
            author_name: entity.author_name,
            author_role: entity.author_role.into(),
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}
