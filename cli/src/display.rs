use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Table};
use todo_core::{pending_count, Todo};

/// RFC 822 layout, always rendered in UTC.
const TIME_FORMAT: &str = "%d %b %y %H:%M UTC";
const CHECK_MARK: char = '\u{2705}';

pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The list as a table with 1-based positions, followed by the pending
/// footer line. Pending tasks are blue, done tasks green, the footer red.
pub fn render(todos: &[Todo], use_colors: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("#").set_alignment(CellAlignment::Center),
        Cell::new("Task").set_alignment(CellAlignment::Center),
        Cell::new("Done?").set_alignment(CellAlignment::Center),
        Cell::new("CreatedAt").set_alignment(CellAlignment::Right),
        Cell::new("CompletedAt").set_alignment(CellAlignment::Right),
    ]);

    for (idx, todo) in todos.iter().enumerate() {
        let (task, done, color) = if todo.done {
            (
                Cell::new(format!("{CHECK_MARK} {}", todo.task)),
                Cell::new("yes"),
                Color::Green,
            )
        } else {
            (Cell::new(&todo.task), Cell::new("no"), Color::Blue)
        };
        let (task, done) = if use_colors {
            (task.fg(color), done.fg(color))
        } else {
            (task, done)
        };
        table.add_row(vec![
            Cell::new(idx + 1),
            task,
            done,
            Cell::new(format_time(Some(todo.created_at))).set_alignment(CellAlignment::Right),
            Cell::new(format_time(todo.completed_at)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{table}\n{}", footer(pending_count(todos), use_colors))
}

pub fn footer(pending: usize, use_colors: bool) -> String {
    let text = format!("You have {pending} pending todos");
    if use_colors {
        text.red().to_string()
    } else {
        text
    }
}
