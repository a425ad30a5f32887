use anyhow::Result;
use todo_core::date;
use todo_core::scheduler::compute_next;

use crate::cli::NextDateCommand;
use crate::parser::today;

/// Prints the bare `YYYYMMDD` result so it can be used from scripts.
pub fn next_date(command: NextDateCommand) -> Result<()> {
    let now = command
        .now
        .unwrap_or_else(|| date::format_date(today()));

    let next = compute_next(&now, &command.date, &command.repeat)?;
    println!("{}", next);

    Ok(())
}
