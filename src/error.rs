//! Merge errors.
use std::io;
use std::path::{Path, PathBuf};

/// Errors that abort a merge. None of them leave the working list modified.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MergeError {
    /// An input file does not exist
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// An input file exists but could not be read
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The structured source is not valid JSON of the expected shape
    #[error("Failed to parse word source {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The structured source parsed but carries no `words` field
    #[error("Word source {} has no \"words\" list", .path.display())]
    MissingWords { path: PathBuf },

    /// Writing the merged list failed
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeError {
    /// Classify an error raised while opening or reading an input file.
    pub(crate) fn from_read(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            MergeError::NotFound { path: path.to_path_buf() }
        } else {
            MergeError::Read { path: path.to_path_buf(), source: err }
        }
    }

    pub(crate) fn write(path: &Path, err: io::Error) -> Self {
        MergeError::Write { path: path.to_path_buf(), source: err }
    }

    /// The file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            MergeError::NotFound { path }
            | MergeError::Read { path, .. }
            | MergeError::Parse { path, .. }
            | MergeError::MissingWords { path }
            | MergeError::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
