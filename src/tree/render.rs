//! Human-readable summaries of folders and links
//!
//! A folder renders as a header block followed by one line per direct child:
//!
//! ```text
//! BookmarkFolder(
//!     ⚫ name='Work',
//!     ⚫ path='Bookmarks bar/Work',
//!     ...
//!     children=[
//!         📂 -> 'Docs'/ (3 urls) (1 Total Folder inside --> 1 folder + 0 nested subfolders)
//!         🔗 -> (https://example.com/)
//!     ],
//! )
//! ```

use std::fmt;

use crate::tree::views::{Bookmark, BookmarkNode, Folder, Link};

const INDENT: &str = "    ";
const MAX_URL_WIDTH: usize = 100;
const SHORT_URL_PREFIX: usize = 35;

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Shorten an over-long URL to its first characters followed by `...`
pub fn shorten_url(url: &str) -> String {
    if url.chars().count() <= MAX_URL_WIDTH {
        return url.to_string();
    }
    let prefix: String = url.chars().take(SHORT_URL_PREFIX).collect();
    format!("{}...", prefix)
}

/// One-line summary of a child, as shown inside its parent's rendering
pub fn summary_line(child: &Bookmark<'_>) -> String {
    match child {
        Bookmark::Folder(folder) => {
            let total = folder.num_subfolders();
            let direct = folder.num_folders();
            let nested = total - direct;
            format!(
                "📂 -> '{}'/ ({} urls) ({} Total Folder{} inside --> {} folder{} + {} nested subfolder{})",
                folder.name(),
                folder.num_urls(),
                total,
                plural(total),
                direct,
                plural(direct),
                nested,
                plural(nested)
            )
        }
        Bookmark::Link(link) => format!("🔗 -> ({})", shorten_url(link.url())),
    }
}

impl fmt::Display for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BookmarkFolder(")?;
        writeln!(f, "{INDENT}⚫ name={:?},", self.name())?;
        writeln!(f, "{INDENT}⚫ path={:?},", self.path())?;
        writeln!(f, "{INDENT}⚫ url={:?},", self.url())?;
        writeln!(f, "{INDENT}⚫ datetime={},", self.date_added())?;
        writeln!(f, "{INDENT}⚫ num_urls={},", self.num_urls())?;
        writeln!(f, "{INDENT}⚫ num_folders={},", self.num_folders())?;
        writeln!(f, "{INDENT}⚫ num_subfolders={},", self.num_subfolders())?;
        writeln!(f, "{INDENT}children=[")?;
        for child in self.children() {
            writeln!(f, "{INDENT}{INDENT}{}", summary_line(&child))?;
        }
        writeln!(f, "{INDENT}],")?;
        write!(f, ")")
    }
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BookmarkUrl(")?;
        writeln!(f, "{INDENT}name={:?},", self.name())?;
        writeln!(f, "{INDENT}url={:?},", self.url())?;
        writeln!(f, "{INDENT}dir_path={:?},", self.dir_path())?;
        writeln!(f, "{INDENT}datetime={},", self.date_added())?;
        write!(f, ")")
    }
}

impl fmt::Display for Bookmark<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bookmark::Folder(folder) => fmt::Display::fmt(folder, f),
            Bookmark::Link(link) => fmt::Display::fmt(link, f),
        }
    }
}
