//! Tests for contact module
//!
//! Email, UK telephone number and UK postcode validators.

use super::validators::*;

// ============================================================================
// Email Tests
// ============================================================================

#[test]
fn test_email_valid() {
    for email in [
        "name@example.com",
        "first.last@example.co.uk",
        "user+tag@sub.domain.gov.uk",
        "O'Brien@Example.COM",
    ] {
        let result = validate_email(Some(email), DEFAULT_EMAIL_FIELD);
        assert!(result.is_valid, "{} should be valid", email);
        assert!(result.error_message.is_none());
    }
}

#[test]
fn test_email_missing() {
    for email in [None, Some(""), Some("   ")] {
        let result = validate_email(email, DEFAULT_EMAIL_FIELD);
        assert!(!result.is_valid);
        assert_eq!(result.message(), "Enter an email address");
    }
}

#[test]
fn test_email_wrong_format() {
    for email in [
        "a@@b.com",
        "name.example.com",
        "a@b@example.com",
        "name@localhost",
        "name@-example.com",
        "na me@example.com",
    ] {
        let result = validate_email(Some(email), DEFAULT_EMAIL_FIELD);
        assert!(!result.is_valid, "{} should be rejected", email);
        assert_eq!(
            result.message(),
            "Enter an email address in the correct format, like name@example.com"
        );
    }
}

#[test]
fn test_email_custom_field_name_article() {
    let result = validate_email(None, "work email");
    assert_eq!(result.message(), "Enter a work email");

    let result = validate_email(Some("nope"), "work email");
    assert_eq!(
        result.message(),
        "Enter a work email in the correct format, like name@example.com"
    );
}

#[test]
fn test_email_label_too_long() {
    let label = "a".repeat(64);
    let email = format!("name@{}.com", label);
    assert!(!validate_email(Some(&email), DEFAULT_EMAIL_FIELD).is_valid);

    let label = "a".repeat(63);
    let email = format!("name@{}.com", label);
    assert!(validate_email(Some(&email), DEFAULT_EMAIL_FIELD).is_valid);
}

// ============================================================================
// Telephone Tests
// ============================================================================

#[test]
fn test_phone_valid_formats() {
    for phone in [
        "01234 567890",
        "07700 900123",
        "+44 1234 567890",
        "0044 1234 567890",
        "(01234) 567-890",
    ] {
        assert!(
            validate_uk_phone_number(Some(phone)).is_valid,
            "{} should be valid",
            phone
        );
    }
}

#[test]
fn test_phone_missing() {
    let result = validate_uk_phone_number(Some(" "));
    assert!(!result.is_valid);
    assert_eq!(result.message(), "Enter a telephone number");
}

#[test]
fn test_phone_wrong_format() {
    for phone in ["1234567890", "0123456789", "+44 123 456", "+1 202 555 0100", "0123456789a"] {
        let result = validate_uk_phone_number(Some(phone));
        assert!(!result.is_valid, "{} should be rejected", phone);
        assert_eq!(
            result.message(),
            "Enter a telephone number in the correct format, like 01234 567890 or +44 1234 567890"
        );
    }
}

#[test]
fn test_normalize_phone_number() {
    assert_eq!(normalize_phone_number("(01234) 567-890"), "01234567890");
    assert_eq!(normalize_phone_number("+44 1234 567890"), "+441234567890");
}

#[test]
fn test_phone_validator_agrees_with_normalized_form() {
    for phone in ["(01234) 567-890", "+44\t1234 567890", "0044-1234-567890", "01234 5678"] {
        assert_eq!(
            validate_uk_phone_number(Some(phone)).is_valid,
            validate_uk_phone_number(Some(&normalize_phone_number(phone))).is_valid,
            "{}",
            phone
        );
    }
}

// ============================================================================
// Postcode Tests
// ============================================================================

#[test]
fn test_postcode_valid_fixtures() {
    for postcode in [
        "SW1A 1AA",
        "sw1a1aa",
        "M1 1AE",
        "B33 8TH",
        "CR2 6XH",
        "DN55 1PT",
        "W1A 0AX",
        "EC1A 1BB",
        "GIR 0AA",
        "  LS1 4AP  ",
    ] {
        assert!(
            validate_uk_postcode(Some(postcode)).is_valid,
            "{} should be valid",
            postcode
        );
    }
}

#[test]
fn test_postcode_invalid() {
    for postcode in ["ABC", "12345", "SW1A", "QQQ QQQ"] {
        let result = validate_uk_postcode(Some(postcode));
        assert!(!result.is_valid, "{} should be rejected", postcode);
        assert_eq!(result.message(), "Enter a real postcode");
    }
}

#[test]
fn test_postcode_missing() {
    let result = validate_uk_postcode(None);
    assert_eq!(result.message(), "Enter a postcode");
}

#[test]
fn test_validators_are_idempotent() {
    let first = validate_email(Some("name@example"), DEFAULT_EMAIL_FIELD);
    let second = validate_email(Some("name@example"), DEFAULT_EMAIL_FIELD);
    assert_eq!(first, second);

    assert_eq!(
        validate_uk_postcode(Some("SW1A 1AA")),
        validate_uk_postcode(Some("SW1A 1AA"))
    );
}
