use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

/// Lock file guarding a task file: `<tasks-file>.lock`.
pub fn lock_path(tasks_path: &Path) -> PathBuf {
    let mut name = tasks_path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Take the session lock, returning the locked File handle; dropping it
/// releases the lock. Never waits: a held lock fails at once with
/// [`TodoError::Locked`] so a second session cannot block on the first.
pub fn acquire_lock(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    file.try_lock_exclusive()
        .map_err(|_| TodoError::Locked(path.display().to_string()))?;

    Ok(file)
}
