use clap::{Parser, Subcommand};

/// A personal task scheduler with compact repeat rules
///
/// Repeat rules: `y` (yearly), `d <n>` (every n days), `w <1-7,...>` (ISO
/// weekdays), `m <days> [<months>]` (days of the month, -1 and -2 count from
/// the end).
#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List tasks, optionally filtered by a date (DD.MM.YYYY) or text
    List(ListCommand),
    /// Show a single task
    Show(ShowCommand),
    /// Edit a task
    Edit(EditCommand),
    /// Mark a task as done, rescheduling it if it repeats
    Do(DoCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Compute the next date of a repeat rule without touching the database
    NextDate(NextDateCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    pub title: String,
    /// The date of the task (YYYYMMDD, `today` or `tomorrow`)
    #[arg(short, long)]
    pub date: Option<String>,
    /// A free-form comment
    #[arg(short, long)]
    pub comment: Option<String>,
    /// The repeat rule of the task
    #[arg(short, long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// A date in DD.MM.YYYY form or text to look for in titles and comments
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// The ID of the task to show
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct EditCommand {
    /// The ID of the task to edit
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub comment: Option<String>,

    #[arg(long)]
    pub repeat: Option<String>,
    /// Remove the repeat rule (make it a one-off task)
    #[arg(long, conflicts_with = "repeat")]
    pub repeat_clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoCommand {
    /// The ID of the task to mark as done
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: i64,
    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct NextDateCommand {
    /// The base date (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// The repeat rule
    #[arg(long)]
    pub repeat: String,
    /// The reference day (YYYYMMDD), defaults to today
    #[arg(long)]
    pub now: Option<String>,
}
