pub mod account_registry;
pub mod task_ledger;
pub mod prompter;

// Re-export traits
pub use account_registry::AccountRegistry;
pub use task_ledger::TaskLedger;
pub use prompter::{ MessageKind, Prompter };
