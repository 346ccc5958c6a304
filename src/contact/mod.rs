// Contact details: email, telephone and postcode

pub mod validators;

#[cfg(test)]
mod tests;

pub use validators::{
    normalize_phone_number, validate_email, validate_uk_phone_number, validate_uk_postcode,
    DEFAULT_EMAIL_FIELD,
};
