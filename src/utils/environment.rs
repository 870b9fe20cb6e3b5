use std::env;
use std::path::PathBuf;

use crate::error::{BookmarkError, Result};

/// Get the current user's home directory
///
/// Uses the platform lookup from `dirs`, falling back to `HOME`.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .or_else(|| env::var_os("HOME").map(PathBuf::from))
        .ok_or(BookmarkError::HomeDirNotFound)
}
