use std::io;
use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::TaskFile;
use crate::store::repo::TaskList;

pub fn run(tasks_path: &Path, format: Format) -> Result<()> {
    let list = TaskList::load(TaskFile::new(tasks_path))?;
    output::print_tasks(&mut io::stdout().lock(), list.tasks(), format)
}
