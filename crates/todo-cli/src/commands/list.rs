use anyhow::Result;
use todo_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::views::table::display_tasks;

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    config: &Config,
) -> Result<()> {
    let search = command.search.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let tasks = repo.find_tasks(search, config.list_limit).await?;

    display_tasks(&tasks, crate::parser::today());

    Ok(())
}
