//! Error types for bookmark parsing and tree queries
//!
//! Parse-time errors abort the whole parse; lookup errors (`AmbiguousName`,
//! `NotFound`) only concern the single call that produced them.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BookmarkError>;

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Browser not supported: '{0}' (pass an explicit bookmark file path instead)")]
    BrowserNotSupported(String),

    #[error("Bookmark file not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Malformed bookmark data at {context}: {reason}")]
    MalformedBookmarkData { context: String, reason: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Ambiguous name '{name}': {count} bookmarks share this name")]
    AmbiguousName { name: String, count: usize },

    #[error("No bookmark named '{name}'")]
    NotFound { name: String },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the home directory")]
    HomeDirNotFound,
}

impl BookmarkError {
    pub(crate) fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        BookmarkError::MalformedBookmarkData { context: context.into(), reason: reason.into() }
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        BookmarkError::NotFound { name: name.into() }
    }
}
