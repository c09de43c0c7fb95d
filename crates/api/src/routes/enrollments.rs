//! Explicit enrollment endpoint.
//!
//! Enrollment also happens implicitly during payment submission; this
//! endpoint covers the "join first, pay later" flow and grants immediate
//! access (status `active` with the default 30-day window).

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{EnrollRequest, Enrollment};
use persistence::entities::EnrollmentStatusDb;
use persistence::repositories::{BatchRepository, EnrollmentRepository, StudentRepository};

/// Enroll a student into a batch. Re-enrolling into the same batch returns
/// the existing enrollment unchanged.
///
/// POST /api/v1/enrollments
pub async fn enroll(
    State(state): State<AppState>,
    Json(request): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    request.validate()?;

    let student_repo = StudentRepository::new(state.pool.clone());
    student_repo
        .find_by_id(request.student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let batch_repo = BatchRepository::new(state.pool.clone());
    batch_repo
        .find_by_id(&request.batch_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Batch not found".to_string()))?;

    let repo = EnrollmentRepository::new(state.pool.clone());
    let enrollment_id = repo
        .resolve(
            request.student_id,
            &request.batch_id,
            EnrollmentStatusDb::Active,
        )
        .await?;

    let enrollment = repo
        .find_by_id(enrollment_id)
        .await?
        .ok_or_else(|| ApiError::Internal("Enrollment vanished after resolve".to_string()))?;

    info!(
        enrollment_id = %enrollment_id,
        student_id = %request.student_id,
        batch_id = %request.batch_id,
        "Enrollment resolved"
    );

    Ok((StatusCode::CREATED, Json(enrollment.into())))
}
