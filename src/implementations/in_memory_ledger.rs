use chrono::Utc;
use log::{ debug, info };

use crate::config::{ HoursPolicy, LedgerOptions, TaskIdPolicy, ValidationRules };
use crate::errors::{ KanbanError, KanbanResult };
use crate::models::task::{ generate_task_id, NewTask, Task, TaskDraft };
use crate::traits::task_ledger::TaskLedger;

/// Task ledger backed by a vector in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskLedger {
    rules: ValidationRules,
    options: LedgerOptions,
    tasks: Vec<Task>,
    /// Tasks ever added; deletions leave it alone
    counter: u32,
    /// Hours ever added; deletions leave it alone
    cumulative_hours: f64,
}

impl InMemoryTaskLedger {
    pub fn new(rules: ValidationRules, options: LedgerOptions) -> Self {
        Self {
            rules,
            options,
            tasks: Vec::new(),
            counter: 0,
            cumulative_hours: 0.0,
        }
    }

    fn check_description(&self, description: &str) -> KanbanResult<()> {
        if self.rules.accepts_description(description) {
            return Ok(());
        }
        Err(KanbanError::DescriptionTooLong {
            length: description.chars().count(),
            max_len: self.rules.description_max_len,
        })
    }
}

impl TaskLedger for InMemoryTaskLedger {
    fn begin_task(&self, name: &str, description: &str) -> KanbanResult<TaskDraft> {
        self.check_description(description)?;
        Ok(TaskDraft {
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    fn insert(&mut self, task: NewTask) -> KanbanResult<Task> {
        self.check_description(&task.description)?;

        if !task.duration.is_finite() || task.duration < 0.0 {
            return Err(KanbanError::InvalidDuration(task.duration));
        }

        let task = Task {
            name: task.name,
            description: task.description,
            developer: task.developer,
            duration: task.duration,
            status: task.status,
            number: self.counter,
            created_at: Utc::now(),
        };

        self.counter += 1;
        self.cumulative_hours += task.duration;
        info!(
            "Added task {} ({}h, {}); {} tasks, {}h total",
            task.id(),
            task.duration,
            task.status,
            self.tasks.len() + 1,
            self.cumulative_hours
        );

        self.tasks.push(task.clone());
        Ok(task)
    }

    fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    fn longest_duration(&self) -> Option<&Task> {
        self.tasks.iter().reduce(|best, task| if task.duration > best.duration { task } else { best })
    }

    fn find_by_developer(&self, last_name: &str) -> Vec<&Task> {
        let needle = last_name.to_lowercase();
        let found: Vec<&Task> = self.tasks
            .iter()
            .filter(|t| t.developer.last_name.to_lowercase() == needle)
            .collect();
        debug!("Found {} tasks for developer {:?}", found.len(), last_name);
        found
    }

    fn delete_by_name(&mut self, name: &str) -> bool {
        let needle = name.to_lowercase();
        match self.tasks.iter().position(|t| t.name.to_lowercase() == needle) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                info!("Deleted task {:?} ({} remaining)", removed.name, self.tasks.len());
                true
            }
            None => {
                debug!("No task named {:?} to delete", name);
                false
            }
        }
    }

    fn total_hours(&self) -> f64 {
        match self.options.hours_policy {
            HoursPolicy::Cumulative => self.cumulative_hours,
            HoursPolicy::Live => self.live_hours(),
        }
    }

    fn task_count(&self) -> u32 {
        self.counter
    }

    fn display_number(&self, task: &Task) -> u32 {
        match self.options.task_id_policy {
            TaskIdPolicy::Creation => task.number,
            TaskIdPolicy::Display => self.counter,
        }
    }

    fn task_id(&self, task: &Task) -> String {
        generate_task_id(&task.name, self.display_number(task), &task.developer.last_name)
    }
}
