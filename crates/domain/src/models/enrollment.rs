//! Enrollment model: the link between a student and a batch, carrying
//! access status and expiry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_batch_code;
use uuid::Uuid;
use validator::Validate;

/// Paid access window granted by a verified payment, in days.
pub const ACCESS_PERIOD_DAYS: i64 = 30;

/// Enrollment access status.
///
/// Created as `Pending` by payment submission (or `Active` by an explicit
/// enroll call); afterwards mutated only by payment adjudication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Pending,
    Active,
    Rejected,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Rejected => "rejected",
        }
    }
}

/// One student's membership in one batch. At most one row exists per
/// (student, batch) pair; the resolver reuses an existing row instead of
/// creating duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub batch_id: String,
    pub status: EnrollmentStatus,
    pub joined_at: NaiveDate,
    pub expire_date: DateTime<Utc>,
}

impl Enrollment {
    /// Whether the paid access window is still open.
    pub fn has_access(&self, now: DateTime<Utc>) -> bool {
        self.status == EnrollmentStatus::Active && self.expire_date > now
    }
}

/// Enrollment joined with batch and course names, for student-facing lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrollmentSummary {
    pub id: Uuid,
    pub batch_id: String,
    pub batch_name: String,
    pub course_title: String,
    pub status: EnrollmentStatus,
    pub joined_at: NaiveDate,
    pub expire_date: DateTime<Utc>,
}

/// Explicit enroll request (without a payment).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct EnrollRequest {
    pub student_id: Uuid,

    #[validate(custom(function = "validate_batch_code"))]
    pub batch_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn enrollment(status: EnrollmentStatus, expire: DateTime<Utc>) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            batch_id: "C1-B1".into(),
            status,
            joined_at: Utc::now().date_naive(),
            expire_date: expire,
        }
    }

    #[test]
    fn test_active_unexpired_has_access() {
        let now = Utc::now();
        let e = enrollment(EnrollmentStatus::Active, now + Duration::days(10));
        assert!(e.has_access(now));
    }

    #[test]
    fn test_expired_or_non_active_has_no_access() {
        let now = Utc::now();
        assert!(!enrollment(EnrollmentStatus::Active, now - Duration::days(1)).has_access(now));
        assert!(!enrollment(EnrollmentStatus::Pending, now + Duration::days(10)).has_access(now));
        assert!(!enrollment(EnrollmentStatus::Rejected, now + Duration::days(10)).has_access(now));
    }
}
