use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::menu::Session;
use crate::prompt::TerminalPrompter;
use crate::store::files::TaskFile;
use crate::store::lock;

/// Run the interactive menu, holding the session lock until it returns.
///
/// The file must load before the lock is taken, so a missing or corrupt
/// list fails without leaving a lock file behind.
pub fn run(tasks_path: &Path) -> Result<()> {
    let file = TaskFile::new(tasks_path);
    file.load()?;
    let _lock = lock::acquire_lock(&lock::lock_path(tasks_path))?;
    debug!(path = %tasks_path.display(), "session started");

    let mut session = Session::new(file, TerminalPrompter::new(), io::stdout());
    session.run()
}
