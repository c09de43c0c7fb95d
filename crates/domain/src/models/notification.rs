//! Student notifications.
//!
//! Notifications carry a structured payload (template key + parameters)
//! instead of pre-rendered text; clients render the message in whatever
//! language and format they present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Cap applied to the student notification feed.
pub const MAX_NOTIFICATIONS_PER_PAGE: i64 = 20;

/// Notification severity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

/// Known notification templates. The key is stored alongside JSON
/// parameters; `render_en` is a convenience English rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTemplate {
    PaymentVerified,
    PaymentRejected,
}

impl NotificationTemplate {
    pub fn key(&self) -> &'static str {
        match self {
            NotificationTemplate::PaymentVerified => "payment_verified",
            NotificationTemplate::PaymentRejected => "payment_rejected",
        }
    }

    /// Parameters for the payment adjudication templates.
    pub fn payment_params(course_title: &str, batch_name: &str) -> Value {
        serde_json::json!({
            "course_title": course_title,
            "batch_name": batch_name,
        })
    }
}

/// A message addressed to one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub student_id: Uuid,
    pub template_key: String,
    pub params: Value,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Default English rendering for clients that do not template
    /// themselves. Unknown keys fall back to the raw key.
    pub fn render_en(&self) -> String {
        let course = self.params["course_title"].as_str().unwrap_or("your course");
        let batch = self.params["batch_name"].as_str().unwrap_or("your batch");

        match self.template_key.as_str() {
            "payment_verified" => format!(
                "Payment verified. You now have access to {} ({}).",
                course, batch
            ),
            "payment_rejected" => format!(
                "Payment rejected for {} ({}). Please re-upload a valid receipt.",
                course, batch
            ),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(key: &str) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            template_key: key.into(),
            params: NotificationTemplate::payment_params("Web Development", "Batch 3"),
            kind: NotificationKind::Info,
            is_read: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_template_keys() {
        assert_eq!(NotificationTemplate::PaymentVerified.key(), "payment_verified");
        assert_eq!(NotificationTemplate::PaymentRejected.key(), "payment_rejected");
    }

    #[test]
    fn test_render_verified() {
        let text = notification("payment_verified").render_en();
        assert!(text.contains("Web Development"));
        assert!(text.contains("Batch 3"));
        assert!(text.contains("verified"));
    }

    #[test]
    fn test_render_unknown_key_falls_back() {
        assert_eq!(notification("mystery_event").render_en(), "mystery_event");
    }
}
