// src/cli.rs
//! Argument parsing and dispatch for the `govuk-validate` binary

use serde_json::Value;

use crate::common::{Clock, RulesConfig, RulesError};
use crate::contact::{self, DEFAULT_EMAIL_FIELD};
use crate::dates::{self, DEFAULT_DATE_FIELD};
use crate::identity;

pub const USAGE: &str = "\
Usage: govuk-validate <kind> [args...]

Kinds:
  email <address> [--field <name>]
  phone <number>
  postcode <postcode>
  nino <number>
  password <password>
  date <day> <month> <year> [--field <name>] [--past] [--future]
       [--today-or-past] [--today-or-future]";

const DATE_FLAGS: [&str; 4] = ["--past", "--future", "--today-or-past", "--today-or-future"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Email { address: String, field: String },
    Phone(String),
    Postcode(String),
    Nino(String),
    Password(String),
    Date {
        day: String,
        month: String,
        year: String,
        field: String,
        past: bool,
        future: bool,
        today_or_past: bool,
        today_or_future: bool,
    },
}

/// Outcome of running a command: whether the input passed, and the JSON to print.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub is_valid: bool,
    pub json: Value,
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I, T>(args: I) -> Result<Command, RulesError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut positional = Vec::new();
    let mut field = None;
    let mut flags = Vec::new();

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        if arg == "--field" {
            let name = iter
                .next()
                .ok_or_else(|| RulesError::Usage("--field needs a value".to_string()))?;
            field = Some(name);
        } else if DATE_FLAGS.contains(&arg.as_str()) {
            flags.push(arg);
        } else if arg.starts_with("--") {
            return Err(RulesError::Usage(format!("unknown flag {}", arg)));
        } else {
            positional.push(arg);
        }
    }

    let has = |flag: &str| flags.iter().any(|f| f == flag);

    let (kind, rest) = positional
        .split_first()
        .ok_or_else(|| RulesError::Usage("missing kind".to_string()))?;

    let single = |rest: &[String]| -> Result<String, RulesError> {
        match rest {
            [value] => Ok(value.clone()),
            _ => Err(RulesError::Usage(format!("{} takes exactly one value", kind))),
        }
    };

    let command = match kind.as_str() {
        "email" => Command::Email {
            address: single(rest)?,
            field: field.unwrap_or_else(|| DEFAULT_EMAIL_FIELD.to_string()),
        },
        "phone" => Command::Phone(single(rest)?),
        "postcode" => Command::Postcode(single(rest)?),
        "nino" => Command::Nino(single(rest)?),
        "password" => Command::Password(single(rest)?),
        "date" => match rest {
            [day, month, year] => Command::Date {
                day: day.clone(),
                month: month.clone(),
                year: year.clone(),
                field: field.unwrap_or_else(|| DEFAULT_DATE_FIELD.to_string()),
                past: has("--past"),
                future: has("--future"),
                today_or_past: has("--today-or-past"),
                today_or_future: has("--today-or-future"),
            },
            _ => {
                return Err(RulesError::Usage(
                    "date takes <day> <month> <year>".to_string(),
                ))
            }
        },
        other => return Err(RulesError::Usage(format!("unknown kind {}", other))),
    };

    Ok(command)
}

/// Runs a parsed command. Empty strings are passed through as blank input.
pub fn run(
    command: &Command,
    config: &RulesConfig,
    clock: &impl Clock,
) -> Result<Outcome, RulesError> {
    let result = match command {
        Command::Email { address, field } => {
            contact::validate_email(Some(address.as_str()), field)
        }
        Command::Phone(number) => contact::validate_uk_phone_number(Some(number.as_str())),
        Command::Postcode(postcode) => contact::validate_uk_postcode(Some(postcode.as_str())),
        Command::Nino(nino) => {
            identity::validate_national_insurance_number(Some(nino.as_str()))
        }
        Command::Password(password) => {
            identity::validate_password(Some(password.as_str()), &config.password_options())
        }
        Command::Date {
            day,
            month,
            year,
            field,
            past,
            future,
            today_or_past,
            today_or_future,
        } => {
            let mut options = config.date_options();
            options.must_be_in_past = *past;
            options.must_be_in_future = *future;
            options.must_be_today_or_past = *today_or_past;
            options.must_be_today_or_future = *today_or_future;

            let result = dates::validate_date(
                Some(day.as_str()),
                Some(month.as_str()),
                Some(year.as_str()),
                field,
                &options,
                clock,
            );
            return Ok(Outcome {
                is_valid: result.is_valid,
                json: serde_json::to_value(&result)?,
            });
        }
    };

    Ok(Outcome {
        is_valid: result.is_valid,
        json: serde_json::to_value(&result)?,
    })
}
