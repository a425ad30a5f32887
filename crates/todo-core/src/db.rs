use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::debug;

use crate::error::CoreError;

pub use sqlx::SqlitePool as DbPool;

const MAX_CONNECTIONS: u32 = 5;

/// Opens (creating if needed) the task database at `db_path` and brings its
/// schema up to date.
///
/// Missing parent directories are created first, so a fresh path such as
/// `data/scheduler.db` works on first use.
pub async fn establish_connection(db_path: &str) -> Result<DbPool, CoreError> {
    let path = Path::new(db_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    debug!(db_path, "task database ready");

    Ok(pool)
}
