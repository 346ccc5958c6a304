// src/dates/validators.rs

use chrono::NaiveDate;
use tracing::debug;

use super::models::{DateValidationOptions, DateValidationResult};
use crate::common::helpers::{article, capitalize_first};
use crate::common::{Clock, SystemClock};

pub const DEFAULT_DATE_FIELD: &str = "date";

// ============================================================================
// Date Validator
// ============================================================================

/// Validates a date entered as separate day, month and year fields.
///
/// Checks run in a fixed order and stop at the first failure: missing
/// parts, then each part's range, then the year limits, then whether the
/// date exists in the calendar (31 November does not), and finally the
/// temporal constraints against `clock.today()`.
pub fn validate_date(
    day: Option<&str>,
    month: Option<&str>,
    year: Option<&str>,
    field_name: &str,
    options: &DateValidationOptions,
    clock: &impl Clock,
) -> DateValidationResult {
    let field = capitalize_first(field_name);

    let day_missing = is_blank(day);
    let month_missing = is_blank(month);
    let year_missing = is_blank(year);

    if day_missing && month_missing && year_missing {
        return DateValidationResult::failure(
            format!("Enter {} {}", article(field_name), field_name),
            true,
            true,
            true,
        );
    }

    if day_missing || month_missing || year_missing {
        let parts = [
            (day_missing, "day"),
            (month_missing, "month"),
            (year_missing, "year"),
        ];
        let missing: Vec<&str> = parts
            .iter()
            .filter(|(is_missing, _)| *is_missing)
            .map(|(_, name)| *name)
            .collect();

        return DateValidationResult::failure(
            format!("{} must include a {}", field, missing.join(" and ")),
            day_missing,
            month_missing,
            year_missing,
        );
    }

    let real_date = || format!("{} must be a real date", field);

    let day_value = match parse_part(day).filter(|d| (1..=31).contains(d)) {
        Some(d) => d,
        None => return DateValidationResult::failure(real_date(), true, false, false),
    };

    let month_value = match parse_part(month).filter(|m| (1..=12).contains(m)) {
        Some(m) => m,
        None => return DateValidationResult::failure(real_date(), false, true, false),
    };

    let year_value = match parse_part(year) {
        Some(y) => y,
        None => return DateValidationResult::failure(real_date(), false, false, true),
    };

    if year_value < options.min_year {
        return DateValidationResult::failure(
            format!("{} must be after {}", field, options.min_year.saturating_sub(1)),
            false,
            false,
            true,
        );
    }

    if year_value > options.max_year {
        return DateValidationResult::failure(
            format!("{} must be before {}", field, options.max_year.saturating_add(1)),
            false,
            false,
            true,
        );
    }

    // Both values are within 1..=31 and 1..=12 here
    let calendar_date =
        NaiveDate::from_ymd_opt(year_value, month_value as u32, day_value as u32);
    let parsed = match calendar_date {
        Some(date) => date,
        None => {
            debug!(
                day = day_value,
                month = month_value,
                year = year_value,
                "Date does not exist in the calendar"
            );
            let day_error = day_exceeds_month(day_value, month_value, year_value);
            let month_error = !(1..=12).contains(&month_value);
            // Day and month fit, so the year is outside the representable calendar
            let year_error = !day_error && !month_error;
            return DateValidationResult::failure(real_date(), day_error, month_error, year_error);
        }
    };

    let today = clock.today();

    let violation = if options.must_be_in_past && parsed > today {
        Some("in the past")
    } else if options.must_be_in_future && parsed < today {
        Some("in the future")
    } else if options.must_be_today_or_past && parsed > today {
        Some("today or in the past")
    } else if options.must_be_today_or_future && parsed < today {
        Some("today or in the future")
    } else {
        None
    };

    if let Some(constraint) = violation {
        debug!(%parsed, %today, constraint, "Date failed temporal constraint");
        return DateValidationResult::failure(
            format!("{} must be {}", field, constraint),
            true,
            true,
            true,
        );
    }

    DateValidationResult::success(parsed)
}

/// Same as [`validate_date`] against the system date.
pub fn validate_date_today(
    day: Option<&str>,
    month: Option<&str>,
    year: Option<&str>,
    field_name: &str,
    options: &DateValidationOptions,
) -> DateValidationResult {
    validate_date(day, month, year, field_name, options, &SystemClock)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn parse_part(value: Option<&str>) -> Option<i32> {
    value.and_then(|v| v.trim().parse::<i32>().ok())
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn day_exceeds_month(day: i32, month: i32, year: i32) -> bool {
    day > days_in_month(month, year)
}
