use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};

/// File name of the task list inside the base directory.
pub const TASKS_FILE: &str = "tasks";

/// Environment variable consulted when `--dir` is absent.
pub const DIR_ENV: &str = "TODO_DIR";

/// Legacy base directory: lists written by the first version of the tool
/// live at `$GOPATH/tasks`.
pub const LEGACY_DIR_ENV: &str = "GOPATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_dir: PathBuf,
}

impl Config {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the base directory from an explicit value (the `--dir` flag,
    /// which clap also fills from `TODO_DIR`), falling back to `GOPATH`.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        let legacy = std::env::var_os(LEGACY_DIR_ENV).map(PathBuf::from);
        Self::resolve_from(dir, legacy)
    }

    fn resolve_from(dir: Option<PathBuf>, legacy: Option<PathBuf>) -> Result<Self> {
        dir.filter(|d| !d.as_os_str().is_empty())
            .or_else(|| legacy.filter(|d| !d.as_os_str().is_empty()))
            .map(Self::new)
            .ok_or(TodoError::NoBaseDir)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.base_dir.join(TASKS_FILE)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
