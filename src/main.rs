// src/main.rs
use dotenv::dotenv;
use std::env;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use govuk_form_rules::cli::{self, USAGE};
use govuk_form_rules::{RulesConfig, RulesError, SystemClock};

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    // Logs go to stderr so stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = RulesConfig::from_env();
    config.validate()?;
    debug!(?config, "Loaded validation config");

    // ========================================================================
    // COMMAND
    // ========================================================================

    let command = match cli::parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(RulesError::Usage(msg)) => {
            error!("{}", msg);
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    let outcome = cli::run(&command, &config, &SystemClock)?;
    println!("{}", serde_json::to_string_pretty(&outcome.json)?);

    Ok(if outcome.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
