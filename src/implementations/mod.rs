pub mod config;
pub mod validation;
pub mod in_memory_registry;
pub mod in_memory_ledger;
