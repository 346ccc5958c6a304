// Day/month/year date input validation

pub mod models;
pub mod validators;


pub use models::{DatePart, DateValidationOptions, DateValidationResult};
pub use validators::{validate_date, validate_date_today, DEFAULT_DATE_FIELD};
