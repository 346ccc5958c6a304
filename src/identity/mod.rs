// Identity details: National Insurance numbers and passwords

pub mod models;
pub mod validators;


pub use models::PasswordValidationOptions;
pub use validators::{validate_national_insurance_number, validate_password};
