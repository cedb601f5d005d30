use anyhow::Result;

use crate::cli::ui;
use crate::cli::OutputFormat;
use crate::config::{ HoursPolicy, KanbanConfig, TaskIdPolicy };

/// Print the active rules and ledger policies
pub fn execute(config: &KanbanConfig, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let rules = &config.rules;
    ui::print_header("Validation Rules");
    ui::print_result(
        "Username",
        &format!(
            "at most {} characters, must contain '{}'",
            rules.username_max_len,
            rules.username_separator
        )
    );
    ui::print_result(
        "Password",
        &format!(
            "at least {} characters with a capital letter, a number and one of {}",
            rules.password_min_len,
            rules.password_specials
        )
    );
    ui::print_result(
        "Task description",
        &format!("at most {} characters", rules.description_max_len)
    );

    ui::print_header("Ledger Policies");
    let id_policy = match config.ledger.task_id_policy {
        TaskIdPolicy::Creation => "number fixed when the task is added",
        TaskIdPolicy::Display => "number taken from the current counter (changes as tasks are added)",
    };
    let hours_policy = match config.ledger.hours_policy {
        HoursPolicy::Cumulative => "every task ever added, deletions included",
        HoursPolicy::Live => "tasks currently in the ledger",
    };
    ui::print_result("Task ID", id_policy);
    ui::print_result("Total hours", hours_policy);

    Ok(())
}
