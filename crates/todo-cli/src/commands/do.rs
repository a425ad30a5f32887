use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use todo_core::models::CompletionResult;
use todo_core::repository::TaskRepository;

use crate::cli::DoCommand;

pub async fn do_task(repo: &impl TaskRepository, command: DoCommand) -> Result<()> {
    let success_style = Style::new().green().bold();

    match repo.complete_task(command.id).await? {
        CompletionResult::Deleted(task) => {
            println!("{} Completed task: '{}'", "✓".style(success_style), task.title);
        }
        CompletionResult::Rescheduled { task, previous_date } => {
            println!("{} Completed task: '{}'", "✓".style(success_style), task.title);
            println!(
                "  {} Rescheduled from {} to {}",
                "→".style(Style::new().blue()),
                previous_date,
                task.date.cyan()
            );
        }
    }

    Ok(())
}
