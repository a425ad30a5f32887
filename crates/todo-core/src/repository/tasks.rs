use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};
use tracing::debug;

use crate::date;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, TaskSearch, UpdateTaskData};
use crate::repository::SqliteRepository;
use crate::scheduler;

const SELECT_TASK: &str = "SELECT id, date, title, comment, repeat FROM scheduler";

impl SqliteRepository {
    async fn find_task_in_transaction(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<Task, CoreError> {
        let task: Option<Task> = sqlx::query_as(&format!("{SELECT_TASK} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        task.ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// Checks that a task's date parses and that its rule, if any, can be evaluated.
    fn validate_schedule(&self, task: &Task) -> Result<(), CoreError> {
        date::parse_date(&task.date).map_err(|_| CoreError::InvalidDate(task.date.clone()))?;
        if task.is_repeating() {
            scheduler::compute_next_at(date::start_of_day(self.today()), &task.date, &task.repeat)?;
        }
        Ok(())
    }
}

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        if data.title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }

        let today = self.today();
        let repeat = data.repeat.unwrap_or_default();
        let mut task_date = data
            .date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| date::format_date(today));

        let due = date::parse_date(&task_date)
            .map_err(|_| CoreError::InvalidDate(task_date.clone()))?;

        let next_date = if repeat.is_empty() {
            date::format_date(today)
        } else {
            scheduler::compute_next_at(date::start_of_day(today), &task_date, &repeat)?
        };

        if due < today {
            debug!(from = %task_date, to = %next_date, "moving past due date forward");
            task_date = next_date;
        }

        let comment = data.comment.unwrap_or_default();
        let result = sqlx::query(
            "INSERT INTO scheduler (title, comment, date, repeat) VALUES ($1, $2, $3, $4)",
        )
        .bind(&data.title)
        .bind(&comment)
        .bind(&task_date)
        .bind(&repeat)
        .execute(self.pool())
        .await?;

        let task = Task {
            id: result.last_insert_rowid(),
            date: task_date,
            title: data.title,
            comment,
            repeat,
        };
        debug!(id = task.id, date = %task.date, "task added");

        Ok(task)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as(&format!("{SELECT_TASK} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, search: Option<&str>, limit: i64) -> Result<Vec<Task>, CoreError> {
        let tasks: Vec<Task> = match TaskSearch::parse(search) {
            TaskSearch::All => {
                sqlx::query_as(&format!("{SELECT_TASK} ORDER BY date ASC, id ASC LIMIT $1"))
                    .bind(limit)
                    .fetch_all(self.pool())
                    .await?
            }
            TaskSearch::OnDate(day) => {
                sqlx::query_as(&format!("{SELECT_TASK} WHERE date = $1 ORDER BY id ASC LIMIT $2"))
                    .bind(day)
                    .bind(limit)
                    .fetch_all(self.pool())
                    .await?
            }
            TaskSearch::Text(text) => {
                // Literal substring match, case-insensitive beyond ASCII.
                let needle = text.to_lowercase();
                let all: Vec<Task> =
                    sqlx::query_as(&format!("{SELECT_TASK} ORDER BY date ASC, id ASC"))
                        .fetch_all(self.pool())
                        .await?;
                all.into_iter()
                    .filter(|task| {
                        task.title.to_lowercase().contains(&needle)
                            || task.comment.to_lowercase().contains(&needle)
                    })
                    .take(usize::try_from(limit).unwrap_or(0))
                    .collect()
            }
        };
        Ok(tasks)
    }

    async fn update_task(&self, id: i64, data: UpdateTaskData) -> Result<Task, CoreError> {
        let mut tx = self.pool().begin().await?;
        let mut task = Self::find_task_in_transaction(&mut tx, id).await?;

        if let Some(title) = data.title {
            task.title = title;
        }
        if let Some(date) = data.date {
            task.date = date;
        }
        if let Some(comment) = data.comment {
            task.comment = comment;
        }
        if let Some(repeat) = data.repeat {
            task.repeat = repeat;
        }

        if task.title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        self.validate_schedule(&task)?;

        sqlx::query(
            "UPDATE scheduler SET title = $1, comment = $2, date = $3, repeat = $4 WHERE id = $5",
        )
        .bind(&task.title)
        .bind(&task.comment)
        .bind(&task.date)
        .bind(&task.repeat)
        .bind(task.id)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(id = task.id, "task updated");
        Ok(task)
    }

    async fn complete_task(&self, id: i64) -> Result<CompletionResult, CoreError> {
        let mut tx = self.pool().begin().await?;
        let mut task = Self::find_task_in_transaction(&mut tx, id).await?;

        if !task.is_repeating() {
            sqlx::query("DELETE FROM scheduler WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            debug!(id, "one-off task completed and removed");
            return Ok(CompletionResult::Deleted(task));
        }

        let now = date::start_of_day(self.today());
        let next_date = scheduler::compute_next_at(now, &task.date, &task.repeat)?;
        let previous_date = std::mem::replace(&mut task.date, next_date);

        sqlx::query("UPDATE scheduler SET date = $1 WHERE id = $2")
            .bind(&task.date)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!(id, from = %previous_date, to = %task.date, "repeating task rescheduled");
        Ok(CompletionResult::Rescheduled {
            task,
            previous_date,
        })
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM scheduler WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }

        debug!(id, "task deleted");
        Ok(())
    }
}
