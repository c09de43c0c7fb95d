//! Supporting services.

pub mod media;
