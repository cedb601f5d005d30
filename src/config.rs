use serde::{ Deserialize, Serialize };

/// Configuration for EasyKanban
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KanbanConfig {
    pub rules: ValidationRules,
    pub ledger: LedgerOptions,
}

/// Format rules applied at registration and task capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Longest accepted username, in characters
    pub username_max_len: usize,

    /// Character every username must contain
    pub username_separator: char,

    /// Shortest accepted password, in characters
    pub password_min_len: usize,

    /// The only non-alphanumeric characters a password may contain
    pub password_specials: String,

    /// Longest accepted task description, in characters
    pub description_max_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules {
            username_max_len: 5,
            username_separator: '_',
            password_min_len: 8,
            password_specials: "@$!%*?&".to_string(),
            description_max_len: 50,
        }
    }
}

/// Options controlling derived ledger state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LedgerOptions {
    pub task_id_policy: TaskIdPolicy,
    pub hours_policy: HoursPolicy,
}

/// Which counter value a task ID embeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskIdPolicy {
    /// The counter value at the moment the task was added. Stable.
    #[default]
    Creation,
    /// The counter value at the moment the ID is rendered. Changes whenever
    /// another task is added.
    Display,
}

/// How the ledger reports total hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HoursPolicy {
    /// Sum of every task ever added; deletions do not subtract.
    #[default]
    Cumulative,
    /// Sum over the tasks currently in the ledger.
    Live,
}
