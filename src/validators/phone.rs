use regex::Regex;
use std::sync::LazyLock;

use super::ValidationError;

// 7-15 digits, optional leading +, spaces/dashes allowed between groups
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9](?:[0-9 -]{5,13})[0-9]$").unwrap());

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::PhoneEmpty);
    }

    if !PHONE_REGEX.is_match(trimmed) {
        return Err(ValidationError::PhoneInvalidFormat);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("+15551234567").is_ok());
        assert!(validate_phone("555-123-4567").is_ok());
        assert!(validate_phone("555 123 4567").is_ok());
    }

    #[test]
    fn test_phone_empty() {
        assert_eq!(validate_phone("").unwrap_err(), ValidationError::PhoneEmpty);
        assert_eq!(validate_phone("  ").unwrap_err(), ValidationError::PhoneEmpty);
    }

    #[test]
    fn test_phone_invalid() {
        assert_eq!(
            validate_phone("12345").unwrap_err(),
            ValidationError::PhoneInvalidFormat
        );
        assert_eq!(
            validate_phone("not a number").unwrap_err(),
            ValidationError::PhoneInvalidFormat
        );
    }
}
