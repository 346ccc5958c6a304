// src/character_count/models.rs

use serde::{Deserialize, Serialize};

/// What the character count component limits, and to how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "max")]
pub enum CountLimit {
    Characters(usize),
    Words(usize),
}

impl CountLimit {
    pub fn max(&self) -> usize {
        match self {
            CountLimit::Characters(max) | CountLimit::Words(max) => *max,
        }
    }

    /// Unit name, pluralised unless `n` is exactly one.
    pub fn unit(&self, n: u64) -> &'static str {
        match (self, n == 1) {
            (CountLimit::Characters(_), true) => "character",
            (CountLimit::Characters(_), false) => "characters",
            (CountLimit::Words(_), true) => "word",
            (CountLimit::Words(_), false) => "words",
        }
    }
}

/// Live status shown under the textarea as the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountStatus {
    pub count: usize,
    /// Negative once over the limit.
    pub remaining: i64,
    pub over_limit: bool,
    /// False while the count is below the configured threshold.
    pub visible: bool,
    pub message: String,
}
