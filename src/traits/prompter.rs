use crate::errors::KanbanResult;

/// Kind of message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Header,
    Info,
    Success,
    Warning,
    Error,
}

/// Trait for the interactive boundary.
///
/// Every prompt returns `KanbanError::InputError` when input can no longer be
/// read, which ends the session.
pub trait Prompter {
    /// Free text; may be empty
    fn input(&mut self, prompt: &str) -> KanbanResult<String>;

    /// Hidden text
    fn password(&mut self, prompt: &str) -> KanbanResult<String>;

    /// Index into `items`
    fn select(&mut self, prompt: &str, items: &[&str]) -> KanbanResult<usize>;

    fn confirm(&mut self, prompt: &str) -> KanbanResult<bool>;

    fn show(&mut self, kind: MessageKind, message: &str);
}
