//! Notification feed endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::Notification;
use persistence::repositories::NotificationRepository;

/// Wire shape for a notification: the structured payload plus a rendered
/// English message for clients that do not localize.
#[derive(Debug, Serialize)]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    pub message: String,
}

impl From<Notification> for NotificationView {
    fn from(notification: Notification) -> Self {
        let message = notification.render_en();
        Self {
            notification,
            message,
        }
    }
}

/// A student's notification feed, newest first, capped at one page.
///
/// GET /api/v1/students/:id/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<NotificationView>>, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let rows = repo.list_for_student(student_id).await?;

    Ok(Json(
        rows.into_iter()
            .map(|entity| Notification::from(entity).into())
            .collect(),
    ))
}

/// Mark a notification read. Idempotent.
///
/// PUT /api/v1/notifications/:id/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());

    if !repo.mark_read(notification_id).await? {
        return Err(ApiError::NotFound("Notification not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "read": true })))
}
