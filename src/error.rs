use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("no base directory configured (pass --dir, or set TODO_DIR or GOPATH)")]
    NoBaseDir,

    #[error("task file {} does not exist (run `todo init` first)", .0.display())]
    MissingStorage(PathBuf),

    #[error("task file {} already exists", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("task file {} is corrupt: {message}", .path.display())]
    CorruptStorage { path: PathBuf, message: String },

    #[error("no task at position {index} (list has {len})")]
    TaskIndexOutOfRange { index: usize, len: usize },

    #[error("locked by another session: {0}")]
    Locked(String),

    #[error("aborted by user")]
    Aborted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(String),
}

impl TodoError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoBaseDir => "no_base_dir",
            Self::MissingStorage(_) => "missing_storage",
            Self::AlreadyInitialized(_) => "already_initialized",
            Self::CorruptStorage { .. } => "corrupt_storage",
            Self::TaskIndexOutOfRange { .. } => "task_index_out_of_range",
            Self::Locked(_) => "locked",
            Self::Aborted => "aborted",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
            Self::Prompt(_) => "prompt_error",
        }
    }
}

impl From<dialoguer::Error> for TodoError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                Self::Aborted
            }
            dialoguer::Error::IO(e) => Self::Prompt(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
