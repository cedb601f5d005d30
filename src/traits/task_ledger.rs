use crate::errors::KanbanResult;
use crate::models::task::{ NewTask, Task, TaskDraft, TaskStatus };

/// Trait for the ordered collection of tasks
pub trait TaskLedger {
    /// First capture phase. Rejects an over-long description before the
    /// developer, duration and status are collected.
    fn begin_task(&self, name: &str, description: &str) -> KanbanResult<TaskDraft>;

    /// Append a captured task, advancing the counter and the running total
    fn insert(&mut self, task: NewTask) -> KanbanResult<Task>;

    /// Both capture phases in one call
    fn add_task(
        &mut self,
        name: &str,
        description: &str,
        developer_first_name: &str,
        developer_last_name: &str,
        duration: f64,
        status: TaskStatus
    ) -> KanbanResult<Task> {
        let draft = self.begin_task(name, description)?;
        self.insert(draft.complete(developer_first_name, developer_last_name, duration, status))
    }

    /// Every task, in insertion order
    fn list_all(&self) -> &[Task];

    /// Task with the greatest duration; the earliest one wins a tie
    fn longest_duration(&self) -> Option<&Task>;

    /// Case-insensitive exact match on the developer's last name
    fn find_by_developer(&self, last_name: &str) -> Vec<&Task>;

    /// Remove the first task whose name matches, ignoring case
    fn delete_by_name(&mut self, name: &str) -> bool;

    /// Total hours as reported under the configured policy
    fn total_hours(&self) -> f64;

    /// Sum of durations over the tasks currently held
    fn live_hours(&self) -> f64 {
        self.list_all().iter().map(|t| t.duration).sum()
    }

    /// Number of tasks ever added
    fn task_count(&self) -> u32;

    /// Task number as it should be shown for `task`
    fn display_number(&self, task: &Task) -> u32;

    /// Task ID as it should be shown for `task`
    fn task_id(&self, task: &Task) -> String;
}
