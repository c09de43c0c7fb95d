//! Course catalog endpoints.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{Course, CreateCourseRequest};
use persistence::repositories::CourseRepository;

/// GET /api/v1/courses
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, ApiError> {
    let repo = CourseRepository::new(state.pool.clone());
    let courses = repo.list().await?;

    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/courses (admin)
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    request.validate()?;

    let repo = CourseRepository::new(state.pool.clone());
    let course = repo
        .create(&request.title, request.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}
