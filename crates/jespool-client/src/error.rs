use std::fmt;
use std::path::PathBuf;

use jespool_types::SpoolId;

/// Result type for jespool-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the archive layer
#[derive(Debug)]
pub enum Error {
    /// No job with the given identity exists in the archive
    JobNotFound(String),

    /// The job exists but has no spool file with the given id
    SpoolFileNotFound { job_id: String, id: SpoolId },

    /// An archive file exists but does not parse
    Malformed { path: PathBuf, reason: String },

    /// Owner/prefix pattern could not be compiled
    Pattern(String),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::JobNotFound(job_id) => {
                write!(f, "Job \"{}\" not found in the spool archive", job_id)
            }
            Error::SpoolFileNotFound { job_id, id } => {
                write!(f, "Spool file \"{}\" not found for job \"{}\"", id, job_id)
            }
            Error::Malformed { path, reason } => {
                write!(f, "Malformed archive file {}: {}", path.display(), reason)
            }
            Error::Pattern(msg) => write!(f, "Invalid filter pattern: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::JobNotFound(_)
            | Error::SpoolFileNotFound { .. }
            | Error::Malformed { .. }
            | Error::Pattern(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}
