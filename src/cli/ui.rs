use chrono::{ DateTime, Utc };
use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, Password, Select };
use serde::Serialize;
use textwrap::wrap;

use crate::errors::{ KanbanError, KanbanResult };
use crate::models::task::{ generate_task_id, Developer, Task, TaskStatus };
use crate::traits::prompter::{ MessageKind, Prompter };
use crate::traits::task_ledger::TaskLedger;

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = (Term::stdout().size().1 as usize).max(20);
    for line in text.lines() {
        if line.is_empty() {
            println!();
            continue;
        }
        for wrapped_line in wrap(line, width.saturating_sub(4)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// The block shown whenever a task is displayed, numbered with `number`
pub fn task_details(task: &Task, number: u32) -> String {
    format!(
        "Task Status: {}\nDeveloper Details: {}\nTask Number: {}\nTask Name: {}\nTask Description: {}\nTask ID: {}\nTask Duration: {} hours",
        task.status,
        task.developer,
        number,
        task.name,
        task.description,
        generate_task_id(&task.name, number, &task.developer.last_name),
        format_hours(task.duration)
    )
}

/// Whole hours keep one decimal place (`8.0`); fractions print as-is (`8.25`)
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

/// JSON shape of a task listing entry
#[derive(Debug, Serialize)]
pub struct TaskView<'a> {
    pub id: String,
    pub number: u32,
    pub name: &'a str,
    pub description: &'a str,
    pub developer: &'a Developer,
    pub duration: f64,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl<'a> TaskView<'a> {
    pub fn new<L: TaskLedger>(ledger: &L, task: &'a Task) -> Self {
        TaskView {
            id: ledger.task_id(task),
            number: ledger.display_number(task),
            name: &task.name,
            description: &task.description,
            developer: &task.developer,
            duration: task.duration,
            status: task.status,
            created_at: task.created_at,
        }
    }
}

pub fn tasks_json<L: TaskLedger>(ledger: &L, tasks: &[&Task]) -> KanbanResult<String> {
    let views: Vec<TaskView> = tasks
        .iter()
        .map(|task| TaskView::new(ledger, task))
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}

fn input_error(e: dialoguer::Error) -> KanbanError {
    KanbanError::InputError(e.to_string())
}

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: get_theme() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str) -> KanbanResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)
    }

    fn password(&mut self, prompt: &str) -> KanbanResult<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(input_error)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> KanbanResult<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(input_error)
    }

    fn confirm(&mut self, prompt: &str) -> KanbanResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(input_error)
    }

    fn show(&mut self, kind: MessageKind, message: &str) {
        match kind {
            MessageKind::Plain => print_text(message),
            MessageKind::Header => print_header(message),
            MessageKind::Info => print_info(message),
            MessageKind::Success => print_success(message),
            MessageKind::Warning => print_warning(message),
            MessageKind::Error => print_error(message),
        }
    }
}
