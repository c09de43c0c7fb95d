//! Exam result endpoints.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{ExamResult, ExamResultRow, RecordExamResultRequest};
use persistence::repositories::ExamResultRepository;

/// POST /api/v1/exam-results (admin)
pub async fn record_exam_result(
    State(state): State<AppState>,
    Json(request): Json<RecordExamResultRequest>,
) -> Result<(StatusCode, Json<ExamResult>), ApiError> {
    request.validate()?;

    if request.marks_obtained > request.total_marks {
        return Err(ApiError::Validation(
            "Marks obtained cannot exceed total marks".to_string(),
        ));
    }

    let repo = ExamResultRepository::new(state.pool.clone());
    let result = repo
        .create(
            request.enrollment_id,
            &request.exam_title,
            request.marks_obtained,
            request.total_marks,
            request.grade.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into())))
}

/// GET /api/v1/exam-results (admin)
pub async fn list_exam_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExamResultRow>>, ApiError> {
    let repo = ExamResultRepository::new(state.pool.clone());
    let rows = repo.list_all().await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
