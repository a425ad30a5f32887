use anyhow::Result;
use todo_core::error::CoreError;
use todo_core::repository::TaskRepository;

use crate::cli::ShowCommand;
use crate::views::table::display_task;

pub async fn show_task(repo: &impl TaskRepository, command: ShowCommand) -> Result<()> {
    let task = repo
        .find_task_by_id(command.id)
        .await?
        .ok_or_else(|| CoreError::NotFound(command.id.to_string()))?;

    display_task(&task);

    Ok(())
}
