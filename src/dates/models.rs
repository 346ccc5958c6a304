// src/dates/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::common::ValidationResult;

/// One of the three inputs of a GOV.UK date input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePart {
    Day,
    Month,
    Year,
}

impl DatePart {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePart::Day => "day",
            DatePart::Month => "month",
            DatePart::Year => "year",
        }
    }
}

/// Options for date validation.
///
/// Temporal constraints are not checked against each other. When several are
/// set, they are applied in declaration order and the first one violated wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateValidationOptions {
    pub min_year: i32,
    pub max_year: i32,
    /// Date must not be after today.
    pub must_be_in_past: bool,
    /// Date must not be before today.
    pub must_be_in_future: bool,
    pub must_be_today_or_past: bool,
    pub must_be_today_or_future: bool,
}

impl Default for DateValidationOptions {
    fn default() -> Self {
        Self {
            min_year: 1900,
            max_year: 2100,
            must_be_in_past: false,
            must_be_in_future: false,
            must_be_today_or_past: false,
            must_be_today_or_future: false,
        }
    }
}

impl DateValidationOptions {
    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = year;
        self
    }

    pub fn max_year(mut self, year: i32) -> Self {
        self.max_year = year;
        self
    }

    pub fn in_past(mut self) -> Self {
        self.must_be_in_past = true;
        self
    }

    pub fn in_future(mut self) -> Self {
        self.must_be_in_future = true;
        self
    }

    pub fn today_or_past(mut self) -> Self {
        self.must_be_today_or_past = true;
        self
    }

    pub fn today_or_future(mut self) -> Self {
        self.must_be_today_or_future = true;
        self
    }
}

/// Result of date validation with individual field error flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValidationResult {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub has_day_error: bool,
    pub has_month_error: bool,
    pub has_year_error: bool,
    pub parsed_date: Option<NaiveDate>,
}

impl DateValidationResult {
    pub fn success(date: NaiveDate) -> Self {
        Self {
            result: ValidationResult::success(),
            has_day_error: false,
            has_month_error: false,
            has_year_error: false,
            parsed_date: Some(date),
        }
    }

    /// Failure flagging the given parts. `affected_fields` follows day, month, year order.
    pub fn failure(message: impl Into<String>, day: bool, month: bool, year: bool) -> Self {
        let flagged = [
            (day, DatePart::Day),
            (month, DatePart::Month),
            (year, DatePart::Year),
        ];
        let parts: Vec<&str> = flagged
            .iter()
            .filter(|(flagged, _)| *flagged)
            .map(|(_, part)| part.as_str())
            .collect();

        Self {
            result: ValidationResult::failure(message, &parts),
            has_day_error: day,
            has_month_error: month,
            has_year_error: year,
            parsed_date: None,
        }
    }

    pub fn has_error(&self, part: DatePart) -> bool {
        match part {
            DatePart::Day => self.has_day_error,
            DatePart::Month => self.has_month_error,
            DatePart::Year => self.has_year_error,
        }
    }

    pub fn into_result(self) -> ValidationResult {
        self.result
    }
}

impl Deref for DateValidationResult {
    type Target = ValidationResult;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}
