use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the FontMod application
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Font container could not be opened or parsed
    #[error("Unreadable font {}: {reason}", .path.display())]
    UnreadableFont { path: PathBuf, reason: String },
    /// No selected file carries the regular (400) weight
    #[error("Missing regular (400) weight for {family}: {candidates} usable file(s) selected")]
    MissingBaselineWeight { family: String, candidates: usize },
    /// Nothing that looks like a font was found in the source directory
    #[error("No font files found in {}", .0.display())]
    EmptySourceSet(PathBuf),
    /// The module template is missing a required file or directory
    #[error("Template may be corrupt, missing: {}", .0.display())]
    CorruptTemplate(PathBuf),
    /// Requested family was not discovered
    #[error("Unknown font family: {0}")]
    UnknownFamily(String),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Interactive family choice could not be understood
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
    /// Update descriptor serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::UnreadableFont {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for FontMod operations
pub type Result<T> = std::result::Result<T, Error>;
