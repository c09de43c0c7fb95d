use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{require_admin, trace_id};
use crate::routes::{
    admin, auth, batches, comments, courses, enrollments, exams, health, lessons, notifications,
    payments, students, uploads,
};
use crate::services::media::{LocalMediaStore, MediaStore};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub media: Arc<dyn MediaStore>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let media = Arc::new(LocalMediaStore::new(&config.media));
    create_app_with_media(config, pool, media)
}

/// Router construction with an injected media store, for tests that swap
/// in an in-memory implementation.
pub fn create_app_with_media(
    config: Config,
    pool: PgPool,
    media: Arc<dyn MediaStore>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        media,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes: registration, login, the open course catalog, and the
    // student-facing resources the frontend reads with a stored student id.
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/courses", get(courses::list_courses))
        .route("/api/v1/batches/open", get(batches::list_open_batches))
        .route("/api/v1/batches/:batch_id/lessons", get(lessons::list_batch_lessons))
        .route(
            "/api/v1/lessons/:lesson_id/comments",
            get(comments::list_lesson_comments).post(comments::post_lesson_comment),
        )
        .route("/api/v1/enrollments", post(enrollments::enroll))
        .route("/api/v1/payments", post(payments::submit_payment))
        .route("/api/v1/students/:student_id", get(students::get_student))
        .route(
            "/api/v1/students/:student_id/profile",
            put(students::update_profile),
        )
        .route(
            "/api/v1/students/:student_id/enrollments",
            get(students::list_student_enrollments),
        )
        .route(
            "/api/v1/students/:student_id/payments",
            get(students::list_student_payments),
        )
        .route(
            "/api/v1/students/:student_id/exam-results",
            get(students::list_student_exam_results),
        )
        .route(
            "/api/v1/students/:student_id/notifications",
            get(notifications::list_notifications),
        )
        .route(
            "/api/v1/notifications/:notification_id/read",
            put(notifications::mark_notification_read),
        );

    // Admin routes, gated by the X-Admin-Key middleware.
    let admin_routes = Router::new()
        .route("/api/v1/students", get(students::list_students))
        .route(
            "/api/v1/students/:student_id",
            put(students::update_student).delete(students::delete_student),
        )
        .route("/api/v1/courses", post(courses::create_course))
        .route(
            "/api/v1/batches",
            get(batches::list_batches).post(batches::create_batch),
        )
        .route("/api/v1/batches/:batch_id", put(batches::update_batch))
        .route("/api/v1/payments", get(payments::list_payments))
        .route(
            "/api/v1/payments/:payment_id",
            put(payments::adjudicate_payment),
        )
        .route("/api/v1/lessons", post(lessons::create_lesson))
        .route("/api/v1/lessons/:lesson_id", delete(lessons::delete_lesson))
        .route(
            "/api/v1/exam-results",
            get(exams::list_exam_results).post(exams::record_exam_result),
        )
        .route("/api/v1/uploads", post(uploads::upload_media))
        .route("/api/v1/admin/stats", get(admin::dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
