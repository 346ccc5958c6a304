// Common module - shared types and utilities across all rule modules

pub mod clock;
pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RulesConfig;
pub use error::RulesError;
pub use validation::{ErrorSummary, ValidationError, ValidationResult};
