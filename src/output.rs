use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
}

const CATEGORY_WIDTH: usize = 10;
const TITLE_WIDTH: usize = 40;

/// One fixed-width console line: importance marker, `[category|MM/DD]`,
/// then the title right-aligned.
pub fn task_line(task: &Task) -> String {
    let marker = if task.important {
        "!*!".red().bold().to_string()
    } else {
        "   ".to_string()
    };
    format!(
        "{marker}[{:>cw$}|{}]{:>tw$}",
        task.category,
        task.due,
        task.title,
        cw = CATEGORY_WIDTH,
        tw = TITLE_WIDTH
    )
}

/// Entry used in the edit/complete selection lists. The date is blue; the
/// prompt theme highlights the focused row.
pub fn task_choice(task: &Task) -> String {
    let date = format!("{}/{}", task.due.month, task.due.day);
    format!("{} - {}", date.blue(), task.title)
}

pub fn print_task_lines(w: &mut impl Write, tasks: &[Task]) -> Result<()> {
    for task in tasks {
        writeln!(w, "{}", task_line(task))?;
    }
    Ok(())
}

pub fn print_tasks(w: &mut impl Write, tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Json => writeln!(w, "{}", serde_json::to_string(tasks)?)?,
        Format::Pretty => print_task_lines(w, tasks)?,
    }
    Ok(())
}
