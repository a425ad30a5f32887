use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use todo_core::error::CoreError;
use todo_core::models::UpdateTaskData;
use todo_core::repository::TaskRepository;

use crate::cli::EditCommand;
use crate::parser::{parse_date_input, today};

pub async fn edit_task(repo: &impl TaskRepository, command: EditCommand) -> Result<()> {
    let repeat = if command.repeat_clear {
        Some(String::new())
    } else {
        command.repeat
    };

    let update_data = UpdateTaskData {
        title: command.title,
        date: command
            .date
            .as_deref()
            .map(|d| parse_date_input(d, today()))
            .transpose()?,
        comment: command.comment,
        repeat,
    };

    if update_data.title.is_none()
        && update_data.date.is_none()
        && update_data.comment.is_none()
        && update_data.repeat.is_none()
    {
        return Err(CoreError::InvalidInput(
            "Nothing to change: pass --title, --date, --comment, --repeat or --repeat-clear"
                .to_string(),
        )
        .into());
    }

    let task = repo.update_task(command.id, update_data).await?;

    println!(
        "{} Updated task {}: {}",
        "✓".style(Style::new().green().bold()),
        task.id.to_string().yellow(),
        task.title.bright_white().bold()
    );

    Ok(())
}
