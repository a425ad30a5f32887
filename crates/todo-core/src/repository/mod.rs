use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{CompletionResult, NewTaskData, Task, UpdateTaskData};

pub mod tasks;

/// Default number of tasks returned by an unfiltered listing.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Task workflows backed by persistent storage.
///
/// Every operation that touches a repeat rule captures "today" once and feeds
/// it to [`crate::scheduler::compute_next_at`].
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    async fn find_tasks(&self, search: Option<&str>, limit: i64) -> Result<Vec<Task>, CoreError>;
    async fn update_task(&self, id: i64, data: UpdateTaskData) -> Result<Task, CoreError>;
    async fn complete_task(&self, id: i64) -> Result<CompletionResult, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
}

/// SQLite implementation of [`TaskRepository`]
pub struct SqliteRepository {
    pool: DbPool,
    fixed_today: Option<NaiveDate>,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            fixed_today: None,
        }
    }

    /// Pins "today" instead of reading the system clock.
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Utc::now().date_naive())
    }
}
