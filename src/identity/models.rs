// src/identity/models.rs

use serde::{Deserialize, Serialize};

/// Password policy. Lengths are counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordValidationOptions {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for PasswordValidationOptions {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: None,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_symbol: false,
        }
    }
}

/// Punctuation accepted as a password symbol.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\"':{}|<>-+=_[]\\;`~";

/// Administrative NINO prefixes that are never issued.
pub const RESERVED_NINO_PREFIXES: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];
