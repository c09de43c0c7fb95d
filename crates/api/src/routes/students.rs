//! Student endpoints: admin roster management, self-service profile
//! updates, and per-student sub-resources (enrollments, payments, exam
//! results).

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    EnrollmentSummary, ExamResultRow, Student, StudentPaymentRow, StudentProfile,
    UpdateProfileRequest, UpdateStudentRequest,
};
use persistence::repositories::{
    EnrollmentRepository, ExamResultRepository, PaymentRepository, StudentRepository,
};
use shared::password::{hash_password, verify_password};

/// Admin roster: all students, newest first.
///
/// GET /api/v1/students (admin)
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentProfile>>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());
    let students = repo.list().await?;

    Ok(Json(
        students
            .into_iter()
            .map(|entity| Student::from(entity).into())
            .collect(),
    ))
}

/// GET /api/v1/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<StudentProfile>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());

    let student = repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok(Json(Student::from(student).into()))
}

/// Admin update of a student's contact details.
///
/// PUT /api/v1/students/:id (admin)
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<StudentProfile>, ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());

    let student = repo
        .update_contact(
            student_id,
            &request.name,
            &request.phone_primary,
            request.phone_secondary.as_deref(),
            request.address.as_deref(),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok(Json(Student::from(student).into()))
}

/// Remove a student and everything hanging off them.
///
/// DELETE /api/v1/students/:id (admin)
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());

    if !repo.delete(student_id).await? {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    info!(student_id = %student_id, "Student deleted");

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Student self-service profile update. A password change requires the
/// current password; other fields keep their previous value when omitted.
///
/// PUT /api/v1/students/:id/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<StudentProfile>, ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());

    let current = repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    let password_hash = match (&request.old_password, &request.new_password) {
        (Some(old), Some(new)) => {
            if !verify_password(old, &current.password_hash)? {
                return Err(ApiError::Unauthorized(
                    "Current password is incorrect".to_string(),
                ));
            }
            hash_password(new)?
        }
        (None, Some(_)) => {
            return Err(ApiError::Validation(
                "Current password is required to set a new password".to_string(),
            ));
        }
        _ => current.password_hash.clone(),
    };

    let name = request.name.as_deref().unwrap_or(&current.name);
    let address = request.address.as_deref().or(current.address.as_deref());
    let profile_image_url = request
        .profile_image_url
        .as_deref()
        .or(current.profile_image_url.as_deref());

    let student = repo
        .update_profile(student_id, name, address, profile_image_url, &password_hash)
        .await?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))?;

    Ok(Json(Student::from(student).into()))
}

/// GET /api/v1/students/:id/enrollments
pub async fn list_student_enrollments(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<EnrollmentSummary>>, ApiError> {
    let repo = EnrollmentRepository::new(state.pool.clone());
    let rows = repo.list_for_student(student_id).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/students/:id/payments
pub async fn list_student_payments(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<StudentPaymentRow>>, ApiError> {
    let repo = PaymentRepository::new(state.pool.clone());
    let rows = repo.list_for_student(student_id).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/students/:id/exam-results
pub async fn list_student_exam_results(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<Json<Vec<ExamResultRow>>, ApiError> {
    let repo = ExamResultRepository::new(state.pool.clone());
    let rows = repo.list_for_student(student_id).await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
