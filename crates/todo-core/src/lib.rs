//! # Todo Core Library
//!
//! A small personal task scheduler built around a compact repeat-rule engine.
//!
//! ## Repeat Rules
//!
//! - `y`: every year on the same month and day
//! - `d <n>`: every `n` days, `n` in `1..=400`
//! - `w <days>`: on the listed ISO weekdays (`1` = Monday ... `7` = Sunday)
//! - `m <days> [<months>]`: on the listed days of the month (`-1` is the
//!   last day, `-2` the one before it), optionally restricted to months
//!
//! ## Core Modules
//!
//! - [`date`]: `YYYYMMDD` parsing and calendar helpers
//! - [`rule`]: Repeat rule grammar and parser
//! - [`next_date`]: Next-occurrence calculation per rule family
//! - [`scheduler`]: String-based entry point used by every workflow
//! - [`models`]: Task data structures
//! - [`db`]: Database connection and migration management
//! - [`repository`]: Task workflows backed by SQLite
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use todo_core::{
//!     db, models::NewTaskData, repository::{SqliteRepository, TaskRepository},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("scheduler.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let task = repo
//!         .add_task(NewTaskData {
//!             title: "Pay rent".to_string(),
//!             repeat: Some("m 1".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Next due on {}", task.date);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod next_date;
pub mod repository;
pub mod rule;
pub mod scheduler;
