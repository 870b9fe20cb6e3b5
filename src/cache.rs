//! Caller-owned cache of parsed bookmark files
//!
//! Entries are keyed by canonical path and browser tag. Each entry remembers
//! the file's modification time and size; a changed file is parsed again on
//! the next lookup.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::{BookmarkError, Result};
use crate::models::BookmarkRoots;
use crate::parsers::parse_bookmarks_file;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    size: u64,
}

impl FileStamp {
    fn of(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .map_err(|source| BookmarkError::Io { path: path.to_path_buf(), source })?;
        Ok(Self { modified: metadata.modified().ok(), size: metadata.len() })
    }
}

#[derive(Debug)]
struct CacheEntry {
    stamp: FileStamp,
    roots: Arc<BookmarkRoots>,
}

#[derive(Debug, Default)]
pub struct BookmarkCache {
    entries: HashMap<(PathBuf, String), CacheEntry>,
}

impl BookmarkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed roots for `path`, parsing the file only if it is not cached or has
    /// changed since it was cached
    pub fn get_or_load(&mut self, path: &Path, browser: &str) -> Result<Arc<BookmarkRoots>> {
        let canonical = canonicalize(path)?;
        let stamp = FileStamp::of(&canonical)?;
        let key = (canonical, browser.to_string());

        if let Some(entry) = self.entries.get(&key)
            && entry.stamp == stamp
        {
            debug!(path = %key.0.display(), "Bookmark cache hit");
            return Ok(Arc::clone(&entry.roots));
        }

        let roots = Arc::new(parse_bookmarks_file(&key.0, browser)?);
        self.entries.insert(key, CacheEntry { stamp, roots: Arc::clone(&roots) });
        Ok(roots)
    }

    /// Drop every cached parse of `path`; returns whether anything was removed
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let before = self.entries.len();
        self.entries.retain(|(cached, _), _| cached != &canonical);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => BookmarkError::PathNotFound(path.to_path_buf()),
        _ => BookmarkError::Io { path: path.to_path_buf(), source },
    })
}
