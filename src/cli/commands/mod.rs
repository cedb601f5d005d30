pub mod check;
pub mod login;
pub mod register;
pub mod rules;
pub mod tasks;

use log::info;

use crate::errors::{ ErrorSeverity, KanbanError, KanbanResult, RecoverableError };
use crate::traits::prompter::{ MessageKind, Prompter };

/// Show a recoverable error and carry on; hand anything else back to the caller
pub(crate) fn report<P: Prompter>(prompter: &mut P, error: KanbanError) -> KanbanResult<()> {
    if !error.is_recoverable() {
        return Err(error);
    }
    info!("Recovered from: {}", error);
    let kind = match error.severity() {
        ErrorSeverity::Warning => MessageKind::Warning,
        _ => MessageKind::Error,
    };
    prompter.show(kind, &error.to_string());
    if let Some(hint) = error.recovery_strategy() {
        prompter.show(MessageKind::Info, &hint);
    }
    Ok(())
}
