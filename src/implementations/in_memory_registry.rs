use log::{ debug, info, warn };
use std::collections::HashMap;

use crate::config::ValidationRules;
use crate::errors::{ KanbanError, KanbanResult };
use crate::models::account::Account;
use crate::traits::account_registry::AccountRegistry;

/// Account registry held in a map for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRegistry {
    rules: ValidationRules,
    accounts: HashMap<String, Account>,
}

impl InMemoryAccountRegistry {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            accounts: HashMap::new(),
        }
    }
}

impl AccountRegistry for InMemoryAccountRegistry {
    fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str
    ) -> KanbanResult<Account> {
        self.check_username(username)?;

        if !self.rules.accepts_password(password) {
            warn!("Rejected registration for {}: password format", username);
            return Err(KanbanError::InvalidPasswordFormat {
                min_len: self.rules.password_min_len,
            });
        }

        let account = Account::new(first_name, last_name, username, password);
        self.accounts.insert(username.to_string(), account.clone());
        info!("Registered account {} ({} total)", username, self.accounts.len());

        Ok(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> KanbanResult<Account> {
        let account = self.accounts
            .get(username)
            .ok_or_else(|| KanbanError::UnknownUser(username.to_string()))?;

        if !account.verify_password(password) {
            warn!("Failed login for {}", username);
            return Err(KanbanError::InvalidCredential);
        }

        debug!("Authenticated {}", username);
        Ok(account.clone())
    }

    fn check_username(&self, username: &str) -> KanbanResult<()> {
        if !self.rules.accepts_username(username) {
            warn!("Rejected registration for {:?}: username format", username);
            return Err(KanbanError::InvalidUsernameFormat {
                username: username.to_string(),
                separator: self.rules.username_separator,
                max_len: self.rules.username_max_len,
            });
        }

        if self.accounts.contains_key(username) {
            warn!("Rejected registration for {}: already taken", username);
            return Err(KanbanError::DuplicateUsername(username.to_string()));
        }

        Ok(())
    }

    fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    fn len(&self) -> usize {
        self.accounts.len()
    }
}
