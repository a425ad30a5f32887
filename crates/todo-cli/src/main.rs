use clap::Parser;
use owo_colors::{OwoColorize, Style};
use todo_core::db;
use todo_core::error::{CoreError, RepeatError};
use todo_core::repository::SqliteRepository;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            handle_error(anyhow::Error::new(e).context("Failed to load configuration"));
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);

    if let Err(e) = run(cli, &config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: cli::Cli, config: &config::Config) -> anyhow::Result<()> {
    // Pure computation, no database needed.
    if let cli::Commands::NextDate(command) = cli.command {
        return commands::next_date::next_date(command);
    }

    let database_path = cli.db.as_deref().unwrap_or(&config.database_path);
    debug!(database_path, "opening task database");
    let db_pool = db::establish_connection(database_path).await?;
    let repository = SqliteRepository::new(db_pool);

    match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(&repository, command).await,
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, config).await
        }
        cli::Commands::Show(command) => commands::show::show_task(&repository, command).await,
        cli::Commands::Edit(command) => commands::edit::edit_task(&repository, command).await,
        cli::Commands::Do(command) => commands::r#do::do_task(&repository, command).await,
        cli::Commands::Delete(command) => {
            commands::delete::delete_task(&repository, command).await
        }
        cli::Commands::NextDate(command) => commands::next_date::next_date(command),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    let repeat_error = err
        .downcast_ref::<RepeatError>()
        .or_else(|| match err.downcast_ref::<CoreError>() {
            Some(CoreError::Repeat(e)) => Some(e),
            _ => None,
        });

    if let Some(repeat_error) = repeat_error {
        eprintln!("{} {}", "Error:".style(error_style), describe_repeat_error(repeat_error));
        return;
    }

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::NotFound(_) | CoreError::InvalidInput(_) | CoreError::EmptyTitle) => {
            eprintln!("{} {}", "Error:".style(error_style), err);
        }
        Some(CoreError::InvalidDate(s)) => {
            eprintln!(
                "{} Invalid date '{}': expected YYYYMMDD",
                "Error:".style(error_style),
                s.yellow()
            );
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}

fn describe_repeat_error(error: &RepeatError) -> String {
    match error {
        RepeatError::InvalidDateFormat(value) => {
            format!("Invalid date '{}': expected YYYYMMDD", value.yellow())
        }
        RepeatError::DateCalculation => {
            format!("Cannot compute the next date: {}", error.yellow())
        }
        _ => format!("Invalid repeat rule: {}", error.yellow()),
    }
}
