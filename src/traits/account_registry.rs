use crate::errors::KanbanResult;
use crate::models::account::Account;

/// Trait for the collection of registered accounts
pub trait AccountRegistry {
    /// Validate and store a new account.
    ///
    /// Checks run in order (username format, uniqueness, password format)
    /// and stop at the first failure.
    fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str
    ) -> KanbanResult<Account>;

    /// Look up an account and compare its password
    fn authenticate(&self, username: &str, password: &str) -> KanbanResult<Account>;

    /// Check a username against the format and uniqueness rules without
    /// registering anything
    fn check_username(&self, username: &str) -> KanbanResult<()>;

    fn contains(&self, username: &str) -> bool;

    fn get(&self, username: &str) -> Option<&Account>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
