//! Domain layer for the Course Manager backend.
//!
//! This crate contains:
//! - Domain models (Student, Batch, Enrollment, Payment, Notification, ...)
//! - Request/response DTOs with validation
//! - The payment/enrollment status vocabulary and transition rules

pub mod models;
