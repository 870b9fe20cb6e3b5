use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BookmarkError, Result};
use crate::models::Browser;
use crate::utils::environment::get_home_dir;

// Maximum bookmark file size: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Default bookmark file for `browser` under `home` on the given OS
/// (a value of `std::env::consts::OS`)
pub fn bookmarks_path_under(home: &Path, browser: Browser, os: &str) -> Option<PathBuf> {
    browser.relative_bookmarks_path(os).map(|relative| home.join(relative))
}

/// Default bookmark file for `browser` on the current platform
///
/// # Errors
///
/// Returns an error if the home directory is unknown or the browser has no
/// known location on this OS.
pub fn default_bookmarks_path(browser: Browser) -> Result<PathBuf> {
    let home = get_home_dir()?;
    bookmarks_path_under(&home, browser, env::consts::OS).ok_or_else(|| {
        BookmarkError::BrowserNotSupported(format!("{} on {}", browser, env::consts::OS))
    })
}

/// Expands a leading `~` component to the home directory
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(get_home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Resolves the bookmark file to read
///
/// An explicit path always wins (any browser tag is then accepted); otherwise
/// `browser` must name a known [`Browser`].
///
/// # Errors
///
/// Returns an error if:
/// - No explicit path is given and the browser is unknown ([`BookmarkError::BrowserNotSupported`])
/// - The resolved path does not exist ([`BookmarkError::PathNotFound`])
pub fn resolve_bookmarks_path(browser: &str, explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => expand_tilde(path)?,
        None => default_bookmarks_path(browser.parse()?)?,
    };

    if !path.exists() {
        return Err(BookmarkError::PathNotFound(path));
    }

    debug!(browser, path = %path.display(), "Resolved bookmark file");
    Ok(path)
}

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle so the size checked is the size of the file
/// that is subsequently read.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .map_err(|source| BookmarkError::Io { path: path.to_path_buf(), source })?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        return Err(BookmarkError::FileTooLarge {
            path: path.to_path_buf(),
            size: file_size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use bookmark_parser::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Library/Bookmarks");
/// // Returns "~/Library/Bookmarks" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&Path>) -> String {
    let home_from_env = get_home_dir().ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
