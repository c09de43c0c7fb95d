//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database named by the
//! `TEST_DATABASE_URL` environment variable. When the variable is unset
//! each test logs a skip notice and returns early, so the suite is safe
//! to run without a database.

// Helper utilities shared across test files; not every file uses every
// helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use uuid::Uuid;

use course_manager_api::app::{create_app, create_app_with_media};
use course_manager_api::config::Config;
use course_manager_api::services::media::MediaStore;
use std::sync::Arc;

/// Admin key baked into the test configuration.
pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// Connect to the test database and apply migrations, or `None` when
/// `TEST_DATABASE_URL` is unset.
pub async fn try_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    persistence::db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Test configuration with the database URL wired in.
pub fn test_config() -> Config {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_default();
    Config::load_for_test(&[
        ("database.url", url.as_str()),
        ("logging.format", "pretty"),
        ("security.admin_api_key", TEST_ADMIN_KEY),
    ])
    .expect("Failed to build test config")
}

/// Create the application router for tests.
pub fn test_app(pool: PgPool) -> Router {
    create_app(test_config(), pool)
}

/// Create the application router with an injected media store.
pub fn test_app_with_media(pool: PgPool, media: Arc<dyn MediaStore>) -> Router {
    create_app_with_media(test_config(), pool, media)
}

/// Generate a unique phone for testing.
pub fn unique_phone() -> String {
    // 11 digits, locally unique per run.
    let n = Uuid::new_v4().as_u128() % 1_000_000_000;
    format!("09{:09}", n)
}

/// Generate a unique batch code for testing.
pub fn unique_batch_code() -> String {
    format!("T-{}", Uuid::new_v4().simple())[..20].to_string()
}

// Seed helpers go straight to the database; the API surface is exercised
// by the assertions, not the fixtures.

pub async fn seed_student(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO students (name, phone_primary, password_hash)
        VALUES ($1, $2, 'x')
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(unique_phone())
    .fetch_one(pool)
    .await
    .expect("Failed to seed student")
}

pub async fn seed_course(pool: &PgPool, title: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (title) VALUES ($1) RETURNING id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .expect("Failed to seed course")
}

pub async fn seed_batch(pool: &PgPool, course_id: Uuid, batch_name: &str) -> String {
    let code = unique_batch_code();
    sqlx::query(
        r#"
        INSERT INTO batches (id, course_id, batch_name, fees, status)
        VALUES ($1, $2, $3, 50000, 'open')
        "#,
    )
    .bind(&code)
    .bind(course_id)
    .bind(batch_name)
    .execute(pool)
    .await
    .expect("Failed to seed batch");
    code
}

pub async fn seed_enrollment(pool: &PgPool, student_id: Uuid, batch_id: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO enrollments (student_id, batch_id, status)
        VALUES ($1, $2, 'pending')
        RETURNING id
        "#,
    )
    .bind(student_id)
    .bind(batch_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed enrollment")
}

pub async fn seed_pending_payment(pool: &PgPool, enrollment_id: Uuid, amount: i64) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO payments (enrollment_id, amount, payment_method, receipt_url, status)
        VALUES ($1, $2, 'kpay', 'http://media.test/receipt.jpg', 'pending')
        RETURNING id
        "#,
    )
    .bind(enrollment_id)
    .bind(amount)
    .fetch_one(pool)
    .await
    .expect("Failed to seed payment")
}

/// Fetch (status, expire_date) of an enrollment.
pub async fn enrollment_state(pool: &PgPool, enrollment_id: Uuid) -> (String, DateTime<Utc>) {
    sqlx::query_as::<_, (String, DateTime<Utc>)>(
        "SELECT status::TEXT, expire_date FROM enrollments WHERE id = $1",
    )
    .bind(enrollment_id)
    .fetch_one(pool)
    .await
    .expect("Failed to read enrollment")
}

// Request builders.

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string(&body).expect("Failed to serialize body"),
        ))
        .expect("Failed to build request")
}

pub fn admin_json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Admin-Key", TEST_ADMIN_KEY)
        .body(Body::from(
            serde_json::to_string(&body).expect("Failed to serialize body"),
        ))
        .expect("Failed to build request")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn admin_get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("X-Admin-Key", TEST_ADMIN_KEY)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Helper to parse a JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
