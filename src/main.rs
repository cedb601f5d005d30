use anyhow::{ anyhow, Result };
use clap::Parser;
use dotenv::dotenv;
use log::{ debug, info };

use easykanban::cli::commands::login::LoginOutcome;
use easykanban::cli::commands::{ check, login, rules, tasks };
use easykanban::cli::ui::{ self, DialoguerPrompter };
use easykanban::cli::{ Commands, KanbanCli, OutputFormat };
use easykanban::{ KanbanConfig, Session };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = KanbanCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if dotenv().is_ok() {
        debug!("Loaded environment variables from .env file");
    }

    let format: OutputFormat = cli.output_format.parse().map_err(|e: String| anyhow!(e))?;
    let config = KanbanConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config, format)?,

        Commands::Rules => rules::execute(&config, format)?,

        Commands::Check { username, password } => {
            let passed = check::execute(
                &config.rules,
                username.as_deref(),
                password.as_deref(),
                format
            )?;
            if !passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// The interactive session: log in, then the task menu until Quit
fn run(config: KanbanConfig, format: OutputFormat) -> Result<()> {
    let mut session = Session::new(config);
    let mut prompter = DialoguerPrompter::new();

    ui::print_header("Welcome to EasyKanban");

    match login::execute(&mut session, &mut prompter)? {
        LoginOutcome::LoggedIn(account) => {
            info!("Session started for {}", account.username);
            tasks::execute(&mut session, &mut prompter, format)?;
            session.logout();
        }
        LoginOutcome::Declined => info!("Registration declined"),
    }

    ui::print_info("Closing EasyKanban. Goodbye!");
    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
