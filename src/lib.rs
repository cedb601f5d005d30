pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
pub mod session;
pub mod cli;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ HoursPolicy, KanbanConfig, LedgerOptions, TaskIdPolicy, ValidationRules };
pub use errors::{ ErrorSeverity, KanbanError, KanbanResult, RecoverableError };
pub use implementations::config::ConfigError;
pub use implementations::in_memory_ledger::InMemoryTaskLedger;
pub use implementations::in_memory_registry::InMemoryAccountRegistry;
pub use implementations::validation::{ is_valid_description, is_valid_password, is_valid_username };
pub use models::{
    account::Account,
    task::{ generate_task_id, Developer, NewTask, Task, TaskDraft, TaskStatus },
};
pub use session::Session;
pub use traits::{ AccountRegistry, MessageKind, Prompter, TaskLedger };
