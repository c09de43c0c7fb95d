//! Notification entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Notification, NotificationKind};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum mapped to the PostgreSQL `notification_kind` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
pub enum NotificationKindDb {
    Success,
    Error,
    Info,
}

impl From<NotificationKindDb> for NotificationKind {
    fn from(db: NotificationKindDb) -> Self {
        match db {
            NotificationKindDb::Success => NotificationKind::Success,
            NotificationKindDb::Error => NotificationKind::Error,
            NotificationKindDb::Info => NotificationKind::Info,
        }
    }
}

impl From<NotificationKind> for NotificationKindDb {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => NotificationKindDb::Success,
            NotificationKind::Error => NotificationKindDb::Error,
            NotificationKind::Info => NotificationKindDb::Info,
        }
    }
}

/// Database row mapping for the notifications table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub template_key: String,
    pub params: Value,
    pub kind: NotificationKindDb,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            template_key: entity.template_key,
            params: entity.params,
            kind: entity.kind.into(),
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}
