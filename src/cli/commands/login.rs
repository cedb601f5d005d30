use crate::cli::commands::{ register, report };
use crate::errors::KanbanResult;
use crate::models::account::Account;
use crate::session::Session;
use crate::traits::account_registry::AccountRegistry;
use crate::traits::prompter::{ MessageKind, Prompter };
use crate::traits::task_ledger::TaskLedger;

/// How the login loop ended
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(Account),
    /// The user chose not to register an unknown username
    Declined,
}

/// Ask for credentials until someone logs in.
///
/// An unknown username offers registration; declining ends the loop.
pub fn execute<R: AccountRegistry, L: TaskLedger, P: Prompter>(
    session: &mut Session<R, L>,
    prompter: &mut P
) -> KanbanResult<LoginOutcome> {
    loop {
        let username = prompter.input("Enter username")?;

        if !session.registry().contains(&username) {
            if prompter.confirm("Username not found. Do you want to register?")? {
                register::execute(session, prompter)?;
                continue;
            }
            return Ok(LoginOutcome::Declined);
        }

        let password = prompter.password("Enter password")?;

        match session.login(&username, &password) {
            Ok(account) => {
                let account = account.clone();
                prompter.show(
                    MessageKind::Success,
                    &format!("Login successful! Welcome, {}!", account.full_name())
                );
                return Ok(LoginOutcome::LoggedIn(account));
            }
            Err(e) => report(prompter, e)?,
        }
    }
}
