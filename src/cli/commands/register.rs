use log::debug;

use crate::cli::commands::report;
use crate::errors::KanbanResult;
use crate::models::account::Account;
use crate::session::Session;
use crate::traits::account_registry::AccountRegistry;
use crate::traits::prompter::{ MessageKind, Prompter };
use crate::traits::task_ledger::TaskLedger;

/// Interactive registration.
///
/// The username is checked before the password is asked for. A rejected
/// field ends the attempt with `Ok(None)` after its reason is shown.
pub fn execute<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P
) -> KanbanResult<Option<Account>> {
    prompter.show(MessageKind::Header, "Registration");

    let first_name = prompter.input("Enter first name")?;
    let last_name = prompter.input("Enter last name")?;
    let username = prompter.input("Enter username")?;

    if let Err(e) = session.registry().check_username(&username) {
        report(prompter, e)?;
        return Ok(None);
    }

    let password = prompter.password("Enter password")?;
    debug!("Registering {}", username);

    match session.register(&first_name, &last_name, &username, &password) {
        Ok(account) => {
            prompter.show(
                MessageKind::Success,
                &format!("Registration successful for username: {}", account.username)
            );
            Ok(Some(account))
        }
        Err(e) => {
            report(prompter, e)?;
            Ok(None)
        }
    }
}
