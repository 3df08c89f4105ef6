use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SproutError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),

    // User-friendly error variants
    #[error("sketch not found: '{path}'\ntip: Check that the sketch file exists and you have read permissions")]
    InputNotFound { path: PathBuf },

    #[error("permission denied: '{path}'\ntip: Check file/directory permissions or run with appropriate privileges")]
    PermissionDenied { path: PathBuf },

    #[error("line {line}: {message}\n  | {text}\ntip: Indent each level by one unit and keep every entry at most one level deeper than its parent")]
    Parse {
        line: usize,
        text: String,
        message: String,
    },

    #[error("sketch contains no directory entry\ntip: Mark at least one line as a directory with a trailing '/'")]
    NoRoot,

    #[error("failed to create '{path}': {source}\ntip: Fix the cause and re-run; entries that already exist are left untouched")]
    Filesystem { path: PathBuf, source: io::Error },
}

impl SproutError {
    /// Creates a contextual IO error based on the operation and path
    pub fn from_io_with_context(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io(error), // Fallback to generic IO error
        }
    }

    /// Creates a parse error carrying the offending line for diagnostics
    pub fn parse(line: usize, text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    /// Creates a filesystem error for a failed creation operation
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
