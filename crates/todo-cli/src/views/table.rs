use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use todo_core::date;
use todo_core::models::Task;

pub fn display_tasks(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    println!("{}", task_table(tasks, today));
}

pub fn task_table(tasks: &[Task], today: NaiveDate) -> Table {
    let today = date::format_date(today);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Title", "Comment", "Repeat"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        // YYYYMMDD strings order the same way as the dates they spell.
        let date_cell = Cell::new(&task.date);
        let date_cell = if task.date < today {
            date_cell.fg(Color::Red)
        } else if task.date == today {
            date_cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            date_cell
        };
        row.add_cell(date_cell);

        row.add_cell(Cell::new(&task.title));
        row.add_cell(Cell::new(&task.comment));
        row.add_cell(repeat_cell(task));
        table.add_row(row);
    }

    table
}

pub fn display_task(task: &Task) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("ID"), Cell::new(task.id)]);
    table.add_row(vec![Cell::new("Title"), Cell::new(&task.title)]);
    table.add_row(vec![Cell::new("Date"), Cell::new(&task.date)]);
    table.add_row(vec![Cell::new("Comment"), Cell::new(&task.comment)]);
    table.add_row(vec![Cell::new("Repeat"), repeat_cell(task)]);

    println!("{table}");
}

fn repeat_cell(task: &Task) -> Cell {
    if task.is_repeating() {
        Cell::new(format!("↻ {}", task.repeat)).fg(Color::Cyan)
    } else {
        Cell::new("None").fg(Color::DarkGrey)
    }
}
