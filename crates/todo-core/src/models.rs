use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::date;

/// A scheduled task as stored in the `scheduler` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    /// Due date in `YYYYMMDD` form.
    pub date: String,
    pub title: String,
    pub comment: String,
    /// Original repeat rule string; empty when the task does not recur.
    pub repeat: String,
}

impl Task {
    #[inline]
    pub fn is_repeating(&self) -> bool {
        !self.repeat.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskData {
    pub title: String,
    /// Defaults to today when absent or empty.
    pub date: Option<String>,
    pub comment: Option<String>,
    pub repeat: Option<String>,
}

/// Partial update; `None` keeps the stored value.
///
/// `repeat: Some(String::new())` stops a task from recurring.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskData {
    pub title: Option<String>,
    pub date: Option<String>,
    pub comment: Option<String>,
    pub repeat: Option<String>,
}

#[derive(Debug)]
pub enum CompletionResult {
    /// The task did not recur and has been removed.
    Deleted(Task),
    /// The task recurs and was moved to its next date.
    Rescheduled { task: Task, previous_date: String },
}

/// How a free-form listing search is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSearch {
    All,
    /// A `DD.MM.YYYY` search, normalised to `YYYYMMDD`.
    OnDate(String),
    Text(String),
}

impl TaskSearch {
    pub fn parse(search: Option<&str>) -> Self {
        let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) else {
            return TaskSearch::All;
        };

        match NaiveDate::parse_from_str(search, "%d.%m.%Y") {
            Ok(day) => TaskSearch::OnDate(date::format_date(day)),
            Err(_) => TaskSearch::Text(search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_search_parse() {
        assert_eq!(TaskSearch::parse(None), TaskSearch::All);
        assert_eq!(TaskSearch::parse(Some("   ")), TaskSearch::All);
        assert_eq!(
            TaskSearch::parse(Some("08.03.2024")),
            TaskSearch::OnDate("20240308".to_string())
        );
        assert_eq!(
            TaskSearch::parse(Some("dentist")),
            TaskSearch::Text("dentist".to_string())
        );
        assert_eq!(
            TaskSearch::parse(Some("31.02.2024")),
            TaskSearch::Text("31.02.2024".to_string())
        );
    }

    #[test]
    fn test_is_repeating() {
        let mut task = Task {
            id: 1,
            date: "20240101".to_string(),
            title: "Water plants".to_string(),
            comment: String::new(),
            repeat: String::new(),
        };
        assert!(!task.is_repeating());
        task.repeat = "d 3".to_string();
        assert!(task.is_repeating());
    }
}
