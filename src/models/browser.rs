use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::BookmarkError;

/// Browsers whose default bookmark file location is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Brave,
}

impl Browser {
    pub const ALL: [Browser; 2] = [Browser::Chrome, Browser::Brave];

    /// Tag used in synthesized folder URLs (`chrome://bookmarks/?id=1`)
    pub fn tag(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Brave => "brave",
        }
    }

    /// Bookmark file location relative to the home directory for the given OS
    /// (values of `std::env::consts::OS`)
    pub fn relative_bookmarks_path(&self, os: &str) -> Option<PathBuf> {
        let parts: &[&str] = match (self, os) {
            (Browser::Chrome, "linux") => &[".config", "google-chrome", "Default", "Bookmarks"],
            (Browser::Chrome, "macos") => {
                &["Library", "Application Support", "Google", "Chrome", "Default", "Bookmarks"]
            }
            (Browser::Chrome, "windows") => {
                &["AppData", "Local", "Google", "Chrome", "User Data", "Default", "Bookmarks"]
            }
            (Browser::Brave, "linux") => {
                &[".config", "BraveSoftware", "Brave-Browser", "Default", "Bookmarks"]
            }
            (Browser::Brave, "macos") => &[
                "Library",
                "Application Support",
                "BraveSoftware",
                "Brave-Browser",
                "Default",
                "Bookmarks",
            ],
            (Browser::Brave, "windows") => &[
                "AppData",
                "Local",
                "BraveSoftware",
                "Brave-Browser",
                "User Data",
                "Default",
                "Bookmarks",
            ],
            _ => return None,
        };
        Some(parts.iter().collect())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Browser {
    type Err = BookmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Browser::ALL
            .into_iter()
            .find(|b| b.tag() == lowered)
            .ok_or_else(|| BookmarkError::BrowserNotSupported(s.to_string()))
    }
}
