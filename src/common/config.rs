// src/common/config.rs
//! Service-wide validation settings loaded from environment variables

use std::env;
use tracing::warn;

use super::error::RulesError;
use crate::dates::DateValidationOptions;
use crate::identity::PasswordValidationOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    pub date_min_year: i32,
    pub date_max_year: i32,
    pub password_min_length: usize,
    pub password_max_length: Option<usize>,
    pub password_require_uppercase: bool,
    pub password_require_lowercase: bool,
    pub password_require_digit: bool,
    pub password_require_symbol: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            date_min_year: 1900,
            date_max_year: 2100,
            password_min_length: 8,
            password_max_length: None,
            password_require_uppercase: false,
            password_require_lowercase: false,
            password_require_digit: false,
            password_require_symbol: false,
        }
    }
}

impl RulesConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unparseable numbers
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            date_min_year: parse_or("GOVUK_DATE_MIN_YEAR", &lookup, defaults.date_min_year),
            date_max_year: parse_or("GOVUK_DATE_MAX_YEAR", &lookup, defaults.date_max_year),
            password_min_length: parse_or(
                "GOVUK_PASSWORD_MIN_LENGTH",
                &lookup,
                defaults.password_min_length,
            ),
            password_max_length: lookup("GOVUK_PASSWORD_MAX_LENGTH")
                .filter(|raw| !raw.trim().is_empty())
                .and_then(|raw| match raw.trim().parse::<usize>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring GOVUK_PASSWORD_MAX_LENGTH='{}': not a number", raw);
                        None
                    }
                }),
            password_require_uppercase: flag("GOVUK_PASSWORD_REQUIRE_UPPERCASE", &lookup),
            password_require_lowercase: flag("GOVUK_PASSWORD_REQUIRE_LOWERCASE", &lookup),
            password_require_digit: flag("GOVUK_PASSWORD_REQUIRE_DIGIT", &lookup),
            password_require_symbol: flag("GOVUK_PASSWORD_REQUIRE_SYMBOL", &lookup),
        }
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.date_min_year > self.date_max_year {
            return Err(RulesError::InvalidConfig(format!(
                "date min year {} is after max year {}",
                self.date_min_year, self.date_max_year
            )));
        }

        if let Some(max) = self.password_max_length {
            if max < self.password_min_length {
                return Err(RulesError::InvalidConfig(format!(
                    "password max length {} is below min length {}",
                    max, self.password_min_length
                )));
            }
        }

        Ok(())
    }

    pub fn date_options(&self) -> DateValidationOptions {
        DateValidationOptions::default()
            .min_year(self.date_min_year)
            .max_year(self.date_max_year)
    }

    pub fn password_options(&self) -> PasswordValidationOptions {
        PasswordValidationOptions {
            min_length: self.password_min_length,
            max_length: self.password_max_length,
            require_uppercase: self.password_require_uppercase,
            require_lowercase: self.password_require_lowercase,
            require_digit: self.password_require_digit,
            require_symbol: self.password_require_symbol,
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}='{}': not a number", key, raw);
            default
        }),
        None => default,
    }
}

fn flag<F>(key: &str, lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_lowercase() == "true")
        .unwrap_or(false)
}
