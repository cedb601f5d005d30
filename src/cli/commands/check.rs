use anyhow::{ anyhow, Result };
use serde::Serialize;

use crate::cli::ui;
use crate::cli::OutputFormat;
use crate::config::ValidationRules;

/// Outcome of checking one credential field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    pub valid: bool,
}

/// Evaluate whichever credentials were given against the rules
pub fn check_credentials(
    rules: &ValidationRules,
    username: Option<&str>,
    password: Option<&str>
) -> Vec<FieldCheck> {
    let mut checks = Vec::new();
    if let Some(username) = username {
        checks.push(FieldCheck { field: "username", valid: rules.accepts_username(username) });
    }
    if let Some(password) = password {
        checks.push(FieldCheck { field: "password", valid: rules.accepts_password(password) });
    }
    checks
}

/// Check credentials without registering; `Ok(false)` when any field fails
pub fn execute(
    rules: &ValidationRules,
    username: Option<&str>,
    password: Option<&str>,
    format: OutputFormat
) -> Result<bool> {
    let checks = check_credentials(rules, username, password);
    if checks.is_empty() {
        return Err(anyhow!("Nothing to check: pass --username and/or --password"));
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&checks)?),
        OutputFormat::Text => {
            for check in &checks {
                if check.valid {
                    ui::print_success(&format!("{} is correctly formatted", check.field));
                } else {
                    ui::print_error(&format!("{} is not correctly formatted", check.field));
                }
            }
        }
    }

    Ok(checks.iter().all(|c| c.valid))
}
