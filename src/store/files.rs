use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TodoError};
use crate::model::Task;

/// The whole task list, stored as one JSON array in one file.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the file with an empty list. Refuses to touch an existing file.
    pub fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Err(TodoError::AlreadyInitialized(self.path.clone()));
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        self.save(&[])
    }

    /// Read every task in file order.
    ///
    /// Empty content and a bare `null` both read as an empty list; any
    /// other unparsable content is reported as corrupt.
    pub fn load(&self) -> Result<Vec<Task>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(TodoError::MissingStorage(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            warn!(path = %self.path.display(), "task file is empty");
            return Ok(Vec::new());
        }

        let tasks: Option<Vec<Task>> =
            serde_json::from_slice(&data).map_err(|e| TodoError::CorruptStorage {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        let tasks = tasks.unwrap_or_else(|| {
            warn!(path = %self.path.display(), "task file holds null");
            Vec::new()
        });
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the file with the full list.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, tasks)?;
        writer.flush()?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Date;
    use tempfile::tempdir;

    fn task(month: i32, day: i32, category: &str, title: &str, important: bool) -> Task {
        Task {
            due: Date::new(month, day),
            category: category.into(),
            title: title.into(),
            important,
        }
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        let tasks = vec![
            task(12, 31, "work", "ship \"it\"", true),
            task(1, 1, "", "", false),
            task(2, 99, "ünïcode", "naïve café ✓", false),
            task(2, 99, "ünïcode", "naïve café ✓", false),
        ];

        file.save(&tasks).unwrap();
        assert_eq!(file.load().unwrap(), tasks);
    }

    #[test]
    fn empty_list_round_trips() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        file.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "[]");
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_writes_compact_single_line() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        file.save(&[task(3, 5, "home", "buy milk", false)]).unwrap();
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            r#"[{"dueDate":{"month":3,"day":5},"category":"home","title":"buy milk","important":false}]"#
        );
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        file.save(&[task(1, 1, "a", "long title to be replaced", true)])
            .unwrap();
        file.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "[]");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        let err = file.load().unwrap_err();
        assert!(matches!(err, TodoError::MissingStorage(_)));
    }

    #[test]
    fn empty_and_null_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));

        fs::write(file.path(), "").unwrap();
        assert!(file.load().unwrap().is_empty());

        fs::write(file.path(), "  \n").unwrap();
        assert!(file.load().unwrap().is_empty());

        fs::write(file.path(), "null").unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        fs::write(file.path(), "[{\"title\": ").unwrap();
        let err = file.load().unwrap_err();
        assert!(matches!(err, TodoError::CorruptStorage { .. }));
        assert_eq!(err.code(), "corrupt_storage");
    }

    #[test]
    fn invalid_utf8_is_reported_as_corrupt() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        fs::write(file.path(), [0xff, 0xfe, b'[']).unwrap();
        let err = file.load().unwrap_err();
        assert!(matches!(err, TodoError::CorruptStorage { .. }));
    }

    #[test]
    fn missing_parent_dir_is_missing_storage() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("nope").join("tasks"));
        let err = file.load().unwrap_err();
        assert!(matches!(err, TodoError::MissingStorage(_)));
    }

    #[test]
    fn init_creates_empty_list_and_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("nested").join("tasks"));
        file.init().unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn init_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let file = TaskFile::new(dir.path().join("tasks"));
        file.save(&[task(3, 5, "home", "buy milk", false)]).unwrap();

        let err = file.init().unwrap_err();
        assert!(matches!(err, TodoError::AlreadyInitialized(_)));
        assert_eq!(file.load().unwrap().len(), 1);
    }
}
