//! Student registration and login.
//!
//! Sessions are client-held: login returns the student profile and the
//! frontend keeps the id. There is no token issuance here.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{LoginRequest, RegisterStudentRequest, Student, StudentProfile};
use persistence::repositories::StudentRepository;
use shared::password::{hash_password, verify_password};

/// Register a new student account.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterStudentRequest>,
) -> Result<(StatusCode, Json<StudentProfile>), ApiError> {
    request.validate()?;

    let repo = StudentRepository::new(state.pool.clone());

    // Pre-check for a friendlier message; the unique index still backstops
    // the race (23505 maps to 409).
    if repo.find_by_phone(&request.phone).await?.is_some() {
        return Err(ApiError::Validation(
            "Phone number is already registered".to_string(),
        ));
    }

    let password_hash = hash_password(&request.password)?;

    let student = repo
        .create(
            &request.name,
            &request.phone,
            &password_hash,
            request.date_of_birth,
            request.address.as_deref(),
        )
        .await?;

    info!(student_id = %student.id, "Student registered");

    let profile: StudentProfile = Student::from(student).into();
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Log in with phone and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StudentProfile>, ApiError> {
    let repo = StudentRepository::new(state.pool.clone());

    let student = repo
        .find_by_phone(&request.phone)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid phone or password".to_string()))?;

    if !verify_password(&request.password, &student.password_hash)? {
        return Err(ApiError::Unauthorized(
            "Invalid phone or password".to_string(),
        ));
    }

    info!(student_id = %student.id, "Student logged in");

    let profile: StudentProfile = Student::from(student).into();
    Ok(Json(profile))
}
