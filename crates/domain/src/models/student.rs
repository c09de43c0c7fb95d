//! Student domain model and account DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_phone;
use uuid::Uuid;
use validator::Validate;

/// Student domain model. The password hash never leaves the backend;
/// [`StudentProfile`] is the outward-facing projection.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub phone_primary: String,
    pub phone_secondary: Option<String>,
    pub password_hash: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a student record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StudentProfile {
    pub id: Uuid,
    pub name: String,
    pub phone_primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentProfile {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            phone_primary: student.phone_primary,
            phone_secondary: student.phone_secondary,
            date_of_birth: student.date_of_birth,
            address: student.address,
            profile_image_url: student.profile_image_url,
            created_at: student.created_at,
        }
    }
}

/// Request to register a new student account.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,

    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
}

/// Login request. Phone is the login identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// Admin update of contact details.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone_primary: String,

    pub phone_secondary: Option<String>,
    pub address: Option<String>,
}

/// Student self-service profile update. A password change requires the
/// current password alongside the new one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub profile_image_url: Option<String>,
    pub old_password: Option<String>,
    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let req = RegisterStudentRequest {
            name: "Aung Aung".into(),
            phone: "09761234567".into(),
            password: "secret1".into(),
            date_of_birth: None,
            address: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_phone() {
        let req = RegisterStudentRequest {
            name: "Aung Aung".into(),
            phone: "not-a-phone".into(),
            password: "secret1".into(),
            date_of_birth: None,
            address: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_profile_hides_credentials() {
        let student = Student {
            id: Uuid::new_v4(),
            name: "Su Su".into(),
            phone_primary: "09761234567".into(),
            phone_secondary: None,
            password_hash: "$argon2id$...".into(),
            date_of_birth: None,
            address: None,
            profile_image_url: None,
            created_at: Utc::now(),
        };
        let profile = StudentProfile::from(student);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("argon2id"));
    }
}
