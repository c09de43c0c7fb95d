//! Payment model and the adjudication state machine.
//!
//! A payment starts `pending` and moves exactly once to `verified` or
//! `rejected`. Both are terminal; a second adjudication is a conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_amount;
use uuid::Uuid;
use validator::Validate;

use super::enrollment::EnrollmentStatus;
use super::notification::{NotificationKind, NotificationTemplate};

/// Payment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Verified,
    Rejected,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Verified => "verified",
            PaymentStatus::Rejected => "rejected",
        }
    }

    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Verified | PaymentStatus::Rejected)
    }
}

/// Admin decision applied to a pending payment.
///
/// The decision determines the payment's terminal status, the cascaded
/// enrollment status, and the notification sent to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDecision {
    Verified,
    Rejected,
}

impl PaymentDecision {
    /// Parse the `status` value of an adjudication request.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "verified" => Some(PaymentDecision::Verified),
            "rejected" => Some(PaymentDecision::Rejected),
            _ => None,
        }
    }

    /// Terminal payment status this decision produces.
    pub fn payment_status(&self) -> PaymentStatus {
        match self {
            PaymentDecision::Verified => PaymentStatus::Verified,
            PaymentDecision::Rejected => PaymentStatus::Rejected,
        }
    }

    /// Enrollment status cascaded onto the linked enrollment.
    pub fn enrollment_status(&self) -> EnrollmentStatus {
        match self {
            PaymentDecision::Verified => EnrollmentStatus::Active,
            PaymentDecision::Rejected => EnrollmentStatus::Rejected,
        }
    }

    /// Expiry shift applied to the linked enrollment, in days relative to
    /// the adjudication time. Verification grants a fresh 30-day window;
    /// rejection backdates expiry so access is revoked immediately.
    pub fn expiry_shift_days(&self) -> i64 {
        match self {
            PaymentDecision::Verified => super::enrollment::ACCESS_PERIOD_DAYS,
            PaymentDecision::Rejected => -1,
        }
    }

    pub fn notification_kind(&self) -> NotificationKind {
        match self {
            PaymentDecision::Verified => NotificationKind::Success,
            PaymentDecision::Rejected => NotificationKind::Error,
        }
    }

    pub fn notification_template(&self) -> NotificationTemplate {
        match self {
            PaymentDecision::Verified => NotificationTemplate::PaymentVerified,
            PaymentDecision::Rejected => NotificationTemplate::PaymentRejected,
        }
    }
}

/// One payment attempt against an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub amount: i64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
}

/// Request to submit a payment for review.
///
/// `batch_id` selects (or auto-creates) the enrollment; when omitted the
/// payment falls back to the student's most recent enrollment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SubmitPaymentRequest {
    pub student_id: Uuid,

    pub batch_id: Option<String>,

    #[validate(custom(function = "validate_amount"))]
    pub amount: i64,

    #[validate(length(min = 1, max = 50, message = "Payment method is required"))]
    pub payment_method: String,

    pub transaction_ref: Option<String>,

    /// URL returned by the media store for the uploaded receipt image.
    /// Optional at the wire level so its absence maps to a validation
    /// error instead of a deserialization failure.
    pub receipt_url: Option<String>,
}

impl SubmitPaymentRequest {
    /// The receipt reference, if present and non-blank.
    pub fn receipt(&self) -> Option<&str> {
        self.receipt_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Adjudication request body. The status string is parsed into a
/// [`PaymentDecision`]; anything else is a validation error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdjudicatePaymentRequest {
    pub status: String,
}

/// Payment joined with student/batch/course names, for the admin review
/// queue (pending first, newest within each group).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminPaymentRow {
    pub id: Uuid,
    pub student_name: String,
    pub phone_primary: String,
    pub course_title: String,
    pub batch_name: String,
    pub amount: i64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
}

/// Payment history row for a student, with enrollment context.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StudentPaymentRow {
    pub id: Uuid,
    pub course_title: String,
    pub batch_id: String,
    pub batch_name: String,
    pub amount: i64,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    pub receipt_url: String,
    pub status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    pub enrollment_status: EnrollmentStatus,
    pub expire_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parse() {
        assert_eq!(PaymentDecision::parse("verified"), Some(PaymentDecision::Verified));
        assert_eq!(PaymentDecision::parse("rejected"), Some(PaymentDecision::Rejected));
        assert_eq!(PaymentDecision::parse("pending"), None);
        assert_eq!(PaymentDecision::parse("VERIFIED"), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!PaymentStatus::Pending.is_terminal());
        assert!(PaymentStatus::Verified.is_terminal());
        assert!(PaymentStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_verified_decision_cascade() {
        let d = PaymentDecision::Verified;
        assert_eq!(d.payment_status(), PaymentStatus::Verified);
        assert_eq!(d.enrollment_status(), EnrollmentStatus::Active);
        assert_eq!(d.expiry_shift_days(), 30);
        assert_eq!(d.notification_kind(), NotificationKind::Success);
    }

    #[test]
    fn test_rejected_decision_cascade() {
        let d = PaymentDecision::Rejected;
        assert_eq!(d.payment_status(), PaymentStatus::Rejected);
        assert_eq!(d.enrollment_status(), EnrollmentStatus::Rejected);
        assert_eq!(d.expiry_shift_days(), -1);
        assert_eq!(d.notification_kind(), NotificationKind::Error);
    }

    #[test]
    fn test_receipt_treats_blank_as_missing() {
        let mut req = SubmitPaymentRequest {
            student_id: Uuid::new_v4(),
            batch_id: Some("C1-B1".into()),
            amount: 30000,
            payment_method: "KBZPay".into(),
            transaction_ref: None,
            receipt_url: None,
        };
        assert_eq!(req.receipt(), None);

        req.receipt_url = Some("   ".into());
        assert_eq!(req.receipt(), None);

        req.receipt_url = Some("/uploads/r1.png".into());
        assert_eq!(req.receipt(), Some("/uploads/r1.png"));
    }
}
