use std::fmt;
use std::path::PathBuf;

/// Comprehensive error types for librarian operations
#[derive(Debug)]
pub enum LibrarianError {
    /// Root path does not exist
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    RootNotDirectory(PathBuf),

    /// Root directory exists but its entries cannot be listed
    RootUnreadable {
        path: PathBuf,
        source: ignore::Error,
    },

    /// An entry below the root could not be visited
    Traversal {
        path: Option<PathBuf>,
        source: ignore::Error,
    },

    /// A note file could not be read or decoded
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    Config(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// IO error (stdout writes, etc.)
    Io(std::io::Error),
}

impl LibrarianError {
    /// Errors that only affect a single file or directory entry.
    ///
    /// These are skipped in lenient scans; everything else always aborts.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            LibrarianError::Traversal { .. } | LibrarianError::FileRead { .. }
        )
    }

    /// The path the error is about, if there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LibrarianError::RootNotFound(path)
            | LibrarianError::RootNotDirectory(path)
            | LibrarianError::RootUnreadable { path, .. }
            | LibrarianError::FileRead { path, .. } => Some(path),
            LibrarianError::Traversal { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for LibrarianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarianError::RootNotFound(path) => {
                write!(f, "Root path not found: {}", path.display())
            }
            LibrarianError::RootNotDirectory(path) => {
                write!(f, "Root path is not a directory: {}", path.display())
            }
            LibrarianError::RootUnreadable { path, source } => write!(
                f,
                "Root path cannot be read: {}: {}",
                path.display(),
                walk_cause(source)
            ),
            LibrarianError::Traversal {
                path: Some(path),
                source,
            } => write!(
                f,
                "Could not traverse '{}': {}",
                path.display(),
                walk_cause(source)
            ),
            LibrarianError::Traversal { path: None, source } => {
                write!(f, "Could not traverse directory: {}", walk_cause(source))
            }
            LibrarianError::FileRead { path, source } => {
                write!(f, "Could not read note '{}': {source}", path.display())
            }
            LibrarianError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LibrarianError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            LibrarianError::Regex(err) => write!(f, "Regex error: {err}"),
            LibrarianError::Json(err) => write!(f, "JSON error: {err}"),
            LibrarianError::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

/// The innermost cause of a walk error.
///
/// `ignore` and `walkdir` both prefix their messages with the path, which
/// the variants above already print.
fn walk_cause(err: &ignore::Error) -> String {
    if let Some(io_err) = err.io_error() {
        let mut cause: &(dyn std::error::Error + 'static) = io_err;
        while let Some(next) = cause.source() {
            cause = next;
        }
        return cause.to_string();
    }

    match err {
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => walk_cause(err),
        other => other.to_string(),
    }
}

impl std::error::Error for LibrarianError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LibrarianError::RootUnreadable { source, .. } => Some(source),
            LibrarianError::Traversal { source, .. } => Some(source),
            LibrarianError::FileRead { source, .. } => Some(source),
            LibrarianError::Regex(err) => Some(err),
            LibrarianError::Json(err) => Some(err),
            LibrarianError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LibrarianError {
    fn from(err: std::io::Error) -> Self {
        LibrarianError::Io(err)
    }
}

impl From<regex::Error> for LibrarianError {
    fn from(err: regex::Error) -> Self {
        LibrarianError::Regex(err)
    }
}

impl From<serde_json::Error> for LibrarianError {
    fn from(err: serde_json::Error) -> Self {
        LibrarianError::Json(err)
    }
}

/// Type alias for Results using LibrarianError
pub type Result<T> = std::result::Result<T, LibrarianError>;
