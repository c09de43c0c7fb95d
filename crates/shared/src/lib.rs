//! Shared utilities for the Course Manager backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Password hashing with Argon2id
//! - Common validation logic

pub mod password;
pub mod validation;
