//! Lesson endpoints: admin upload and the per-batch listing students see.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{CreateLessonRequest, Lesson};
use persistence::repositories::{BatchRepository, LessonRepository};

/// POST /api/v1/lessons (admin)
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(request): Json<CreateLessonRequest>,
) -> Result<(StatusCode, Json<Lesson>), ApiError> {
    request.validate()?;

    let batch_repo = BatchRepository::new(state.pool.clone());
    batch_repo
        .find_by_id(&request.batch_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Batch not found".to_string()))?;

    let repo = LessonRepository::new(state.pool.clone());
    let lesson = repo
        .create(
            &request.batch_id,
            &request.title,
            request.video_url.as_deref(),
            request.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(lesson.into())))
}

/// GET /api/v1/batches/:id/lessons
pub async fn list_batch_lessons(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> Result<Json<Vec<Lesson>>, ApiError> {
    let repo = LessonRepository::new(state.pool.clone());
    let lessons = repo.list_for_batch(&batch_id).await?;

    Ok(Json(lessons.into_iter().map(Into::into).collect()))
}

/// DELETE /api/v1/lessons/:id (admin)
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = LessonRepository::new(state.pool.clone());

    if !repo.delete(lesson_id).await? {
        return Err(ApiError::NotFound("Lesson not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}
