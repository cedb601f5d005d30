use clap::{ Parser, Subcommand };
use std::path::PathBuf;
use std::str::FromStr;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "easykanban",
    about = "A credential-gated, in-memory task tracker for the terminal",
    version,
    author,
    long_about = None
)]
pub struct KanbanCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in (or register) and manage tasks interactively
    Run,

    /// Show the active username, password and description rules
    Rules,

    /// Check credentials against the format rules without registering
    Check {
        /// Username to check
        #[arg(short, long)]
        username: Option<String>,

        /// Password to check
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// How task listings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {} (expected text or json)", other)),
        }
    }
}
