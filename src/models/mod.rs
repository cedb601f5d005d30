//! Data models for EasyKanban

pub mod account;
pub mod task;

pub use account::Account;
pub use task::{ Developer, NewTask, Task, TaskDraft, TaskStatus };
