//! Threaded lesson comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Who authored a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentRole {
    Student,
    Admin,
}

impl CommentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentRole::Student => "student",
            CommentRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Comment {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub author_name: String,
    pub author_role: CommentRole,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request to post a comment under a lesson.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PostCommentRequest {
    #[validate(length(min = 1, max = 255, message = "Author name is required"))]
    pub author_name: String,

    pub author_role: CommentRole,

    #[validate(length(min = 1, max = 4000, message = "Message must be 1-4000 characters"))]
    pub message: String,
}
