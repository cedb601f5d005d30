use log::{ debug, info };
use std::str::FromStr;

use crate::cli::commands::report;
use crate::cli::ui;
use crate::cli::OutputFormat;
use crate::errors::{ KanbanError, KanbanResult };
use crate::models::task::{ Task, TaskStatus };
use crate::session::Session;
use crate::traits::account_registry::AccountRegistry;
use crate::traits::prompter::{ MessageKind, Prompter };
use crate::traits::task_ledger::TaskLedger;

pub const MENU_ITEMS: [&str; 6] = [
    "Add tasks",
    "List all tasks",
    "Display task with longest duration",
    "Search tasks by developer",
    "Delete task by name",
    "Quit",
];

/// Entries of the task menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTasks,
    ListAll,
    LongestDuration,
    SearchByDeveloper,
    DeleteByName,
    Quit,
}

impl MenuChoice {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(MenuChoice::AddTasks),
            1 => Some(MenuChoice::ListAll),
            2 => Some(MenuChoice::LongestDuration),
            3 => Some(MenuChoice::SearchByDeveloper),
            4 => Some(MenuChoice::DeleteByName),
            5 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Task menu loop; returns when the user picks Quit
pub fn execute<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P,
    format: OutputFormat
) -> KanbanResult<()> {
    if !session.is_authenticated() {
        return Err(KanbanError::NotAuthenticated);
    }

    loop {
        let index = prompter.select("EasyKanban Menu", &MENU_ITEMS)?;
        let Some(choice) = MenuChoice::from_index(index) else {
            prompter.show(MessageKind::Warning, "Invalid option. Please choose again.");
            continue;
        };
        debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::AddTasks => add_tasks(session, prompter)?,
            MenuChoice::ListAll => list_all(session, prompter, format)?,
            MenuChoice::LongestDuration => longest_duration(session, prompter, format)?,
            MenuChoice::SearchByDeveloper => search_by_developer(session, prompter, format)?,
            MenuChoice::DeleteByName => delete_by_name(session, prompter)?,
            MenuChoice::Quit => break,
        }
    }

    info!("Leaving task menu");
    Ok(())
}

/// Ask how many tasks to capture, capture them, then report total hours
pub fn add_tasks<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P
) -> KanbanResult<()> {
    let count: usize = prompt_parsed(prompter, "Enter number of tasks to enter")?;

    for _ in 0..count {
        add_task(session, prompter)?;
    }

    let total = session.ledger()?.total_hours();
    prompter.show(MessageKind::Info, &format!("Total Hours Across All Tasks: {}", total));
    Ok(())
}

/// Capture one task in two phases; the description is checked before
/// anything else is asked.
pub fn add_task<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P
) -> KanbanResult<Option<Task>> {
    prompter.show(MessageKind::Header, "Add Task");

    let name = prompter.input("Enter Task Name")?;
    let description = prompter.input("Enter Task Description")?;

    let draft = match session.ledger()?.begin_task(&name, &description) {
        Ok(draft) => draft,
        Err(e) => {
            report(prompter, e)?;
            return Ok(None);
        }
    };
    prompter.show(MessageKind::Success, "Task successfully captured");

    let developer_first_name = prompter.input("Enter Developer First Name")?;
    let developer_last_name = prompter.input("Enter Developer Last Name")?;
    let duration = prompt_duration(prompter)?;
    let status = select_status(prompter)?;

    let new_task = draft.complete(&developer_first_name, &developer_last_name, duration, status);
    match session.ledger_mut()?.insert(new_task) {
        Ok(task) => {
            // the counter value this task was added under, whatever the ID policy
            prompter.show(MessageKind::Plain, &ui::task_details(&task, task.number));
            Ok(Some(task))
        }
        Err(e) => {
            report(prompter, e)?;
            Ok(None)
        }
    }
}

pub fn list_all<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &Session<R, L>,
    prompter: &mut P,
    format: OutputFormat
) -> KanbanResult<()> {
    let ledger = session.ledger()?;
    let tasks: Vec<&Task> = ledger.list_all().iter().collect();

    if tasks.is_empty() && format == OutputFormat::Text {
        prompter.show(MessageKind::Info, "No tasks available.");
        return Ok(());
    }
    show_tasks(prompter, ledger, "All Tasks:", &tasks, format)
}

pub fn longest_duration<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &Session<R, L>,
    prompter: &mut P,
    format: OutputFormat
) -> KanbanResult<()> {
    let ledger = session.ledger()?;
    match ledger.longest_duration() {
        Some(task) => show_tasks(prompter, ledger, "Task with Longest Duration:", &[task], format),
        None => {
            prompter.show(MessageKind::Info, "No tasks available.");
            Ok(())
        }
    }
}

pub fn search_by_developer<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &Session<R, L>,
    prompter: &mut P,
    format: OutputFormat
) -> KanbanResult<()> {
    let last_name = prompter.input("Enter Developer Last Name to search tasks")?;
    let ledger = session.ledger()?;
    let found = ledger.find_by_developer(&last_name);

    if found.is_empty() && format == OutputFormat::Text {
        prompter.show(
            MessageKind::Info,
            &format!("Tasks assigned to {}:\nNo tasks found for this developer.", last_name)
        );
        return Ok(());
    }
    show_tasks(prompter, ledger, &format!("Tasks assigned to {}:", last_name), &found, format)
}

pub fn delete_by_name<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P
) -> KanbanResult<()> {
    let name = prompter.input("Enter Task Name to delete")?;

    if session.ledger_mut()?.delete_by_name(&name) {
        prompter.show(MessageKind::Success, &format!("Task '{}' deleted successfully.", name));
        Ok(())
    } else {
        report(prompter, KanbanError::TaskNotFound(name))
    }
}

fn show_tasks<L: TaskLedger, P: Prompter>(
    prompter: &mut P,
    ledger: &L,
    title: &str,
    tasks: &[&Task],
    format: OutputFormat
) -> KanbanResult<()> {
    match format {
        OutputFormat::Json => {
            prompter.show(MessageKind::Plain, &ui::tasks_json(ledger, tasks)?);
        }
        OutputFormat::Text => {
            let blocks: Vec<String> = tasks
                .iter()
                .map(|task| ui::task_details(task, ledger.display_number(task)))
                .collect();
            prompter.show(MessageKind::Plain, &format!("{}\n{}", title, blocks.join("\n\n")));
        }
    }
    Ok(())
}

fn select_status<P: Prompter>(prompter: &mut P) -> KanbanResult<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let index = prompter.select("Select Task Status", &labels)?;
    TaskStatus::ALL
        .get(index)
        .copied()
        .ok_or_else(|| KanbanError::InputError(format!("no status at index {}", index)))
}

/// Re-prompt until the answer parses
fn prompt_parsed<T: FromStr, P: Prompter>(prompter: &mut P, prompt: &str) -> KanbanResult<T> {
    loop {
        let raw = prompter.input(prompt)?;
        match raw.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => prompter.show(MessageKind::Error, &format!("'{}' is not a valid number", raw)),
        }
    }
}

fn prompt_duration<P: Prompter>(prompter: &mut P) -> KanbanResult<f64> {
    loop {
        let hours: f64 = prompt_parsed(prompter, "Enter Task Duration (in hours)")?;
        if hours.is_finite() && hours >= 0.0 {
            return Ok(hours);
        }
        prompter.show(MessageKind::Error, &KanbanError::InvalidDuration(hours).to_string());
    }
}
