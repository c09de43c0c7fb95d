//! Common validation utilities.

use validator::ValidationError;

/// Maximum accepted phone number length.
const MAX_PHONE_LEN: usize = 20;

/// Minimum accepted phone number length.
const MIN_PHONE_LEN: usize = 6;

/// Maximum length of a batch code (e.g. `C1-B1`).
const MAX_BATCH_CODE_LEN: usize = 50;

/// Validates a phone number: digits with an optional leading `+`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);

    if digits.len() < MIN_PHONE_LEN
        || phone.len() > MAX_PHONE_LEN
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone must be 6-20 digits, optionally prefixed with +".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a batch code: short, uppercase alphanumeric with hyphens.
pub fn validate_batch_code(code: &str) -> Result<(), ValidationError> {
    let valid = !code.is_empty()
        && code.len() <= MAX_BATCH_CODE_LEN
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("batch_code_format");
        err.message = Some("Batch code must be alphanumeric (hyphens allowed), max 50 chars".into());
        Err(err)
    }
}

/// Validates a payment amount in whole kyat.
pub fn validate_amount(amount: i64) -> Result<(), ValidationError> {
    if amount > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be positive".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("09761234567").is_ok());
        assert!(validate_phone("+959761234567").is_ok());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("09-761-234").is_err());
        assert!(validate_phone("call me maybe").is_err());
        assert!(validate_phone("+95976123456789012345").is_err());
    }

    #[test]
    fn test_batch_codes() {
        assert!(validate_batch_code("C1-B1").is_ok());
        assert!(validate_batch_code("WEB_2026-B3").is_ok());
        assert!(validate_batch_code("").is_err());
        assert!(validate_batch_code("has space").is_err());
        assert!(validate_batch_code(&"X".repeat(51)).is_err());
    }

    #[test]
    fn test_amounts() {
        assert!(validate_amount(30000).is_ok());
        assert!(validate_amount(0).is_err());
        assert!(validate_amount(-500).is_err());
    }
}
