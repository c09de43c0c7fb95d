//! HTTP route handlers.

pub mod admin;
pub mod auth;
pub mod batches;
pub mod comments;
pub mod courses;
pub mod enrollments;
pub mod exams;
pub mod health;
pub mod lessons;
pub mod notifications;
pub mod payments;
pub mod students;
pub mod uploads;
