use std::fmt;

use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };

/// Progress of a task. No transitions between statuses are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    Doing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::Doing, TaskStatus::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::Doing => "Doing",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Developer a task is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for Developer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// A task held in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub developer: Developer,
    /// Hours, never negative
    pub duration: f64,
    pub status: TaskStatus,
    /// Ledger counter value when the task was added
    pub number: u32,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// ID built from the number captured at creation
    pub fn id(&self) -> String {
        generate_task_id(&self.name, self.number, &self.developer.last_name)
    }
}

/// First two characters of the name, the counter, and the last three
/// characters of the developer's last name, e.g. `LO:0:SON`.
///
/// Shorter names and last names contribute all of their characters.
pub fn generate_task_id(name: &str, number: u32, developer_last_name: &str) -> String {
    let prefix: String = name.chars().take(2).collect();
    let count = developer_last_name.chars().count();
    let suffix: String = developer_last_name.chars().skip(count.saturating_sub(3)).collect();
    format!("{}:{}:{}", prefix.to_uppercase(), number, suffix.to_uppercase())
}

/// First capture phase: name and an already-accepted description.
///
/// Only the ledger hands these out, so holding one means the description
/// passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub(crate) name: String,
    pub(crate) description: String,
}

impl TaskDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Second capture phase
    pub fn complete(
        self,
        developer_first_name: &str,
        developer_last_name: &str,
        duration: f64,
        status: TaskStatus
    ) -> NewTask {
        NewTask {
            name: self.name,
            description: self.description,
            developer: Developer {
                first_name: developer_first_name.to_string(),
                last_name: developer_last_name.to_string(),
            },
            duration,
            status,
        }
    }
}

/// A fully captured task that has not been added yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub developer: Developer,
    pub duration: f64,
    pub status: TaskStatus,
}
