use std::fmt;

use chrono::{ DateTime, Utc };

/// A registered user of EasyKanban
#[derive(Clone, PartialEq)]
pub struct Account {
    pub username: String,
    password: String,
    pub first_name: String,
    pub last_name: String,
    pub registered_at: DateTime<Utc>,
}

impl Account {
    /// Build an account. Format rules are enforced by the registry, not here.
    pub fn new(first_name: &str, last_name: &str, username: &str, password: &str) -> Self {
        Account {
            username: username.to_string(),
            password: password.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Exact, case-sensitive comparison
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("registered_at", &self.registered_at)
            .finish()
    }
}
