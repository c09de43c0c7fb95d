//! Persistence layer for the Course Manager backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations and the payment/enrollment transactions

pub mod db;
pub mod entities;
pub mod repositories;
