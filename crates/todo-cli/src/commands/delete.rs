use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use todo_core::error::CoreError;
use todo_core::repository::TaskRepository;

use crate::cli::DeleteCommand;

pub async fn delete_task(repo: &impl TaskRepository, command: DeleteCommand) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete task '{}'?", task.title))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    repo.delete_task(task.id).await?;
    println!(
        "{} Deleted task: '{}'",
        "✓".style(Style::new().green().bold()),
        task.title
    );

    Ok(())
}
