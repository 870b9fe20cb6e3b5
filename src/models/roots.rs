use crate::error::{BookmarkError, Result};
use crate::tree::{Bookmark, BookmarkNode, BookmarkTree, Folder};

/// Keys of the top-level sections under `roots`, in the order they are exposed
pub const ROOT_SECTIONS: [&str; 3] = ["bookmark_bar", "other", "synced"];

/// The three top-level folders produced by parsing one bookmark file
#[derive(Debug)]
pub struct BookmarkRoots {
    bookmark_bar: BookmarkTree,
    other: BookmarkTree,
    synced: BookmarkTree,
}

impl BookmarkRoots {
    pub(crate) fn new(bookmark_bar: BookmarkTree, other: BookmarkTree, synced: BookmarkTree) -> Self {
        Self { bookmark_bar, other, synced }
    }

    pub fn bookmark_bar(&self) -> Folder<'_> {
        self.bookmark_bar.root()
    }

    pub fn other(&self) -> Folder<'_> {
        self.other.root()
    }

    pub fn synced(&self) -> Folder<'_> {
        self.synced.root()
    }

    /// Browser tag the roots were parsed with
    pub fn browser(&self) -> &str {
        self.bookmark_bar.browser()
    }

    /// Root folder by section key (`bookmark_bar`, `other`, `synced`)
    pub fn section(&self, key: &str) -> Option<Folder<'_>> {
        match key {
            "bookmark_bar" => Some(self.bookmark_bar()),
            "other" => Some(self.other()),
            "synced" => Some(self.synced()),
            _ => None,
        }
    }

    /// `(section key, root folder)` pairs in [`ROOT_SECTIONS`] order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Folder<'_>)> + '_ {
        [self.bookmark_bar(), self.other(), self.synced()]
            .into_iter()
            .enumerate()
            .map(|(i, folder)| (ROOT_SECTIONS[i], folder))
    }

    /// Total links across all three roots
    pub fn num_urls(&self) -> usize {
        self.iter().map(|(_, root)| root.num_urls()).sum()
    }

    /// Resolve `root/child/...`, where the first segment is a section key or a
    /// root folder's display name
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use bookmark_parser::{BookmarkNode, load_bookmarks};
    /// let roots = load_bookmarks("chrome", None)?;
    /// let work = roots.find("bookmark_bar/Work")?;
    /// println!("{}", work.path());
    /// # Ok::<(), bookmark_parser::BookmarkError>(())
    /// ```
    pub fn find(&self, path: &str) -> Result<Bookmark<'_>> {
        let trimmed = path.trim_matches('/');
        let (head, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        let root = self
            .section(head)
            .or_else(|| self.iter().map(|(_, root)| root).find(|root| root.name() == head))
            .ok_or_else(|| BookmarkError::not_found(head))?;
        root.resolve(rest)
    }
}
