use std::path::Path;

use crate::error::Result;
use crate::store::files::TaskFile;

pub fn run(tasks_path: &Path) -> Result<()> {
    let file = TaskFile::new(tasks_path);
    file.init()?;
    println!("Initialized empty task list at {}", file.path().display());
    Ok(())
}
