// Common validation types

use serde::Serialize;

/// Outcome of a single validator call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub affected_fields: Vec<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            error_message: None,
            affected_fields: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>, affected_fields: &[&str]) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            affected_fields: affected_fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Error message, or an empty string for a successful result
    pub fn message(&self) -> &str {
        self.error_message.as_deref().unwrap_or("")
    }
}

/// One entry in an error summary: the field to link to and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Collects failures from several validators in the order the form shows them.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorSummary {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ErrorSummary {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Records a validator result against `field`. Successful results are ignored.
    pub fn record(&mut self, field: &str, result: &ValidationResult) {
        if let Some(message) = result.error_message.as_deref().filter(|_| !result.is_valid) {
            self.add_error(field, message);
        }
    }

    pub fn merge(&mut self, other: ErrorSummary) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl Default for ErrorSummary {
    fn default() -> Self {
        Self::new()
    }
}
