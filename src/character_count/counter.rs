// src/character_count/counter.rs

use super::models::{CountLimit, CountStatus};
use crate::common::helpers::capitalize_first;
use crate::common::ValidationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCount {
    limit: CountLimit,
    threshold: Option<u8>,
}

impl CharacterCount {
    pub fn new(limit: CountLimit) -> Self {
        Self {
            limit,
            threshold: None,
        }
    }

    pub fn characters(max: usize) -> Self {
        Self::new(CountLimit::Characters(max))
    }

    pub fn words(max: usize) -> Self {
        Self::new(CountLimit::Words(max))
    }

    /// Hide the count message until the text reaches `percent` of the limit.
    /// Values above 100 are clamped.
    pub fn with_threshold(mut self, percent: u8) -> Self {
        self.threshold = Some(percent.min(100));
        self
    }

    pub fn limit(&self) -> CountLimit {
        self.limit
    }

    pub fn threshold(&self) -> Option<u8> {
        self.threshold
    }

    pub fn count(&self, text: &str) -> usize {
        match self.limit {
            CountLimit::Characters(_) => text.chars().count(),
            CountLimit::Words(_) => text.split_whitespace().count(),
        }
    }

    pub fn status(&self, text: &str) -> CountStatus {
        let count = self.count(text);
        let max = self.limit.max();
        let remaining = max as i64 - count as i64;
        let over_limit = remaining < 0;

        let message = if over_limit {
            let excess = remaining.unsigned_abs();
            format!("{} {} too many", excess, self.limit.unit(excess))
        } else {
            let left = remaining as u64;
            format!("{} {} remaining", left, self.limit.unit(left))
        };

        CountStatus {
            count,
            remaining,
            over_limit,
            visible: over_limit || self.reaches_threshold(count),
            message,
        }
    }

    /// Hint shown when the live count is unavailable.
    pub fn fallback_hint(&self) -> String {
        let max = self.limit.max() as u64;
        format!("You can enter up to {} {}", max, self.limit.unit(max))
    }

    /// Fails when the submitted text is over the limit.
    pub fn validate(&self, text: &str, field_name: &str) -> ValidationResult {
        if self.count(text) <= self.limit.max() {
            return ValidationResult::success();
        }

        let max = self.limit.max() as u64;
        ValidationResult::failure(
            format!(
                "{} must be {} {} or fewer",
                capitalize_first(field_name),
                max,
                self.limit.unit(max)
            ),
            &[],
        )
    }

    fn reaches_threshold(&self, count: usize) -> bool {
        match self.threshold {
            None => true,
            // count >= max * percent / 100, widened so large limits cannot overflow
            Some(percent) => {
                count as u128 * 100 >= self.limit.max() as u128 * percent as u128
            }
        }
    }
}
