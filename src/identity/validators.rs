// src/identity/validators.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::models::{PasswordValidationOptions, PASSWORD_SYMBOLS, RESERVED_NINO_PREFIXES};
use crate::common::helpers::safe_identifier_log;
use crate::common::ValidationResult;

// ============================================================================
// National Insurance Number
// ============================================================================

// First letter excludes D, F, I, Q, U, V. Second also excludes O.
static NINO_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-CEGHJ-PR-TW-Z][A-CEGHJ-NPR-TW-Z][0-9]{6}[A-D]?$")
        .expect("NINO pattern compiles")
});

/// Validates a UK National Insurance number. Spaces are ignored and
/// letters may be entered in either case.
pub fn validate_national_insurance_number(nino: Option<&str>) -> ValidationResult {
    let nino = match nino.filter(|n| !n.trim().is_empty()) {
        Some(n) => n,
        None => return ValidationResult::failure("Enter a National Insurance number", &[]),
    };

    let cleaned = nino.replace(' ', "").to_uppercase();

    let reserved = RESERVED_NINO_PREFIXES
        .iter()
        .any(|prefix| cleaned.starts_with(prefix));

    if reserved || !NINO_REGEX.is_match(&cleaned) {
        debug!(
            nino = %safe_identifier_log(&cleaned),
            reserved,
            "National Insurance number failed format check"
        );
        return ValidationResult::failure(
            "Enter a National Insurance number in the correct format",
            &[],
        );
    }

    ValidationResult::success()
}

// ============================================================================
// Password
// ============================================================================

/// Checks a password against `options`. Rules are applied in a fixed order
/// and the first one that fails determines the message.
pub fn validate_password(
    password: Option<&str>,
    options: &PasswordValidationOptions,
) -> ValidationResult {
    let password = match password.filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => return ValidationResult::failure("Enter a password", &[]),
    };

    let length = password.chars().count();

    if length < options.min_length {
        return ValidationResult::failure(
            format!("Password must be at least {} characters", options.min_length),
            &[],
        );
    }

    if let Some(max) = options.max_length {
        if length > max {
            return ValidationResult::failure(
                format!("Password must be {} characters or less", max),
                &[],
            );
        }
    }

    if options.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        return ValidationResult::failure("Password must include a capital letter", &[]);
    }

    if options.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        return ValidationResult::failure("Password must include a lowercase letter", &[]);
    }

    if options.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("Password must include a number", &[]);
    }

    if options.require_symbol && !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return ValidationResult::failure("Password must include a symbol", &[]);
    }

    ValidationResult::success()
}
