//! Lesson comment threads.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{Comment, PostCommentRequest};
use persistence::repositories::CommentRepository;

/// GET /api/v1/lessons/:id/comments
pub async fn list_lesson_comments(
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let repo = CommentRepository::new(state.pool.clone());
    let comments = repo.list_for_lesson(lesson_id).await?;

    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/lessons/:id/comments
pub async fn post_lesson_comment(
    State(state): State<AppState>,
    Path(lesson_id): Path<Uuid>,
    Json(request): Json<PostCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    request.validate()?;

    // A missing lesson surfaces through the FK (23503 -> 404).
    let repo = CommentRepository::new(state.pool.clone());
    let comment = repo
        .create(
            lesson_id,
            &request.author_name,
            request.author_role.into(),
            &request.message,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}
