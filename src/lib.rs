// src/lib.rs
//! GOV.UK Design System form rules.
//!
//! Validators for the common GOV.UK form questions (email, telephone,
//! postcode, National Insurance number, password, and day/month/year dates)
//! plus the state behind the character count, cookie banner, accordion and
//! tabs components.
//! Every validator returns a [`ValidationResult`] value; bad input is never
//! an error.

pub mod accordion;
pub mod character_count;
pub mod cli;
pub mod common;
pub mod contact;
pub mod cookies;
pub mod dates;
pub mod identity;
pub mod tabs;

pub use accordion::{Accordion, AccordionSection};
pub use common::{
    Clock, ErrorSummary, FixedClock, RulesConfig, RulesError, SystemClock, ValidationError,
    ValidationResult,
};
pub use contact::{validate_email, validate_uk_phone_number, validate_uk_postcode};
pub use dates::{validate_date, DateValidationOptions, DateValidationResult};
pub use identity::{validate_national_insurance_number, validate_password, PasswordValidationOptions};
pub use tabs::{Tab, Tabs};
