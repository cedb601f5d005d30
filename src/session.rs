use log::info;

use crate::config::KanbanConfig;
use crate::errors::{ KanbanError, KanbanResult };
use crate::implementations::in_memory_ledger::InMemoryTaskLedger;
use crate::implementations::in_memory_registry::InMemoryAccountRegistry;
use crate::models::account::Account;
use crate::traits::account_registry::AccountRegistry;
use crate::traits::task_ledger::TaskLedger;

/// Everything one run of EasyKanban owns: accounts, tasks, the active
/// configuration and who is logged in.
pub struct Session<R = InMemoryAccountRegistry, L = InMemoryTaskLedger> {
    config: KanbanConfig,
    registry: R,
    ledger: L,
    current_user: Option<Account>,
}

impl Session {
    /// A fresh session backed by the in-memory registry and ledger
    pub fn new(config: KanbanConfig) -> Self {
        let registry = InMemoryAccountRegistry::new(config.rules.clone());
        let ledger = InMemoryTaskLedger::new(config.rules.clone(), config.ledger.clone());
        Self::with_parts(config, registry, ledger)
    }
}

impl<R: AccountRegistry, L: TaskLedger> Session<R, L> {
    pub fn with_parts(config: KanbanConfig, registry: R, ledger: L) -> Self {
        Session {
            config,
            registry,
            ledger,
            current_user: None,
        }
    }

    pub fn config(&self) -> &KanbanConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str
    ) -> KanbanResult<Account> {
        self.registry.register(first_name, last_name, username, password)
    }

    /// Authenticate and remember the account for the rest of the session
    pub fn login(&mut self, username: &str, password: &str) -> KanbanResult<&Account> {
        let account = self.registry.authenticate(username, password)?;
        info!("{} logged in", account.username);
        Ok(&*self.current_user.insert(account))
    }

    pub fn logout(&mut self) {
        if let Some(account) = self.current_user.take() {
            info!("{} logged out", account.username);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&Account> {
        self.current_user.as_ref()
    }

    /// Read access to the ledger; requires a login
    pub fn ledger(&self) -> KanbanResult<&L> {
        if self.current_user.is_none() {
            return Err(KanbanError::NotAuthenticated);
        }
        Ok(&self.ledger)
    }

    /// Write access to the ledger; requires a login
    pub fn ledger_mut(&mut self) -> KanbanResult<&mut L> {
        if self.current_user.is_none() {
            return Err(KanbanError::NotAuthenticated);
        }
        Ok(&mut self.ledger)
    }
}
