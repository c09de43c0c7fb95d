//! Batch endpoints: the admin catalog, the public open list, and batch
//! management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{Batch, BatchCatalogEntry, CreateBatchRequest, OpenBatch, UpdateBatchRequest};
use persistence::repositories::{BatchRepository, CourseRepository};

/// Admin catalog: every batch with course title and lesson count.
///
/// GET /api/v1/batches (admin)
pub async fn list_batches(
    State(state): State<AppState>,
) -> Result<Json<Vec<BatchCatalogEntry>>, ApiError> {
    let repo = BatchRepository::new(state.pool.clone());
    let rows = repo.list_catalog().await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Public list of batches currently accepting enrollments, with seat
/// occupancy.
///
/// GET /api/v1/batches/open
pub async fn list_open_batches(
    State(state): State<AppState>,
) -> Result<Json<Vec<OpenBatch>>, ApiError> {
    let repo = BatchRepository::new(state.pool.clone());
    let rows = repo.list_open().await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/batches (admin)
pub async fn create_batch(
    State(state): State<AppState>,
    Json(request): Json<CreateBatchRequest>,
) -> Result<(StatusCode, Json<Batch>), ApiError> {
    request.validate()?;

    let course_repo = CourseRepository::new(state.pool.clone());
    course_repo
        .find_by_id(request.course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    let repo = BatchRepository::new(state.pool.clone());
    let batch = repo
        .create(
            &request.id,
            request.course_id,
            &request.batch_name,
            request.fees,
            request.max_students,
            request.start_date,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(batch.into())))
}

/// PUT /api/v1/batches/:id (admin)
pub async fn update_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
    Json(request): Json<UpdateBatchRequest>,
) -> Result<Json<Batch>, ApiError> {
    request.validate()?;

    let repo = BatchRepository::new(state.pool.clone());
    let batch = repo
        .update(
            &batch_id,
            &request.batch_name,
            request.fees,
            request.status.into(),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Batch not found".to_string()))?;

    Ok(Json(batch.into()))
}
