//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// 2021-08-06T10:20:00Z in microseconds since 1601-01-01
pub const DEFAULT_DATE_ADDED: &str = "13272718800000000";

/// Hands out increasing bookmark ids so fixtures stay unique without bookkeeping
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a url node
pub struct UrlBuilder {
    name: String,
    url: String,
    id: Option<String>,
}

impl UrlBuilder {
    pub fn new(name: &str, url: &str) -> Self {
        Self { name: name.to_string(), url: url.to_string(), id: None }
    }

    /// Set an explicit id
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn to_json(&self, ids: &mut IdGen) -> Value {
        let id = self.id.clone().unwrap_or_else(|| ids.next());
        json!({
            "date_added": DEFAULT_DATE_ADDED,
            "guid": format!("00000000-0000-4000-8000-{:0>12}", id),
            "id": id,
            "meta_info": {"last_visited_desktop": "13272718800000000"},
            "name": self.name,
            "type": "url",
            "url": self.url,
        })
    }
}

/// A child of a folder: either a nested folder or a url
pub enum Child {
    Folder(FolderBuilder),
    Url(UrlBuilder),
}

/// Builder for a folder node
pub struct FolderBuilder {
    name: String,
    id: Option<String>,
    children: Vec<Child>,
}

impl FolderBuilder {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), id: None, children: Vec::new() }
    }

    /// Set an explicit id
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a url child
    pub fn url(mut self, name: &str, url: &str) -> Self {
        self.children.push(Child::Url(UrlBuilder::new(name, url)));
        self
    }

    /// Add a folder child
    pub fn folder(mut self, folder: FolderBuilder) -> Self {
        self.children.push(Child::Folder(folder));
        self
    }

    pub fn to_json(&self, ids: &mut IdGen) -> Value {
        let id = self.id.clone().unwrap_or_else(|| ids.next());
        let children: Vec<Value> = self
            .children
            .iter()
            .map(|child| match child {
                Child::Folder(f) => f.to_json(ids),
                Child::Url(u) => u.to_json(ids),
            })
            .collect();
        json!({
            "children": children,
            "date_added": DEFAULT_DATE_ADDED,
            "date_modified": "0",
            "guid": format!("00000000-0000-4000-8000-{:0>12}", id),
            "id": id,
            "name": self.name,
            "type": "folder",
        })
    }
}

/// Builder for a whole `Bookmarks` file
pub struct BookmarkFileBuilder {
    temp_dir: TempDir,
    bookmark_bar: FolderBuilder,
    other: FolderBuilder,
    synced: FolderBuilder,
}

impl BookmarkFileBuilder {
    /// Create a builder with three empty roots named like Chrome names them
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            bookmark_bar: FolderBuilder::new("Bookmarks bar"),
            other: FolderBuilder::new("Other bookmarks"),
            synced: FolderBuilder::new("Mobile bookmarks"),
        }
    }

    pub fn bookmark_bar(mut self, folder: FolderBuilder) -> Self {
        self.bookmark_bar = folder;
        self
    }

    pub fn other(mut self, folder: FolderBuilder) -> Self {
        self.other = folder;
        self
    }

    pub fn synced(mut self, folder: FolderBuilder) -> Self {
        self.synced = folder;
        self
    }

    /// The full JSON document
    pub fn to_json(&self) -> Value {
        let mut ids = IdGen::new();
        json!({
            "checksum": "0123456789abcdef0123456789abcdef",
            "roots": {
                "bookmark_bar": self.bookmark_bar.to_json(&mut ids),
                "other": self.other.to_json(&mut ids),
                "synced": self.synced.to_json(&mut ids),
            },
            "version": 1,
        })
    }

    /// Write `Bookmarks` into the temp dir and return (dir guard, file path)
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("Bookmarks");
        let content = serde_json::to_string_pretty(&self.to_json()).expect("Failed to serialize");
        fs::write(&path, content).expect("Failed to write Bookmarks");
        (self.temp_dir, path)
    }
}

impl Default for BookmarkFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw content as a `Bookmarks` file
pub fn write_raw_bookmarks(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("Bookmarks");
    fs::write(&path, content).expect("Failed to write Bookmarks");
    (temp_dir, path)
}

/// Helper to create a realistic bookmark file with nesting on every root
///
/// ```text
/// Bookmarks bar
/// ├── Work
/// │   ├── Mail
/// │   ├── Calendar
/// │   └── Projects
/// │       ├── Tracker
/// │       └── Archive
/// │           └── Old wiki
/// ├── Rust
/// └── News
/// Other bookmarks
/// ├── Recipes
/// │   └── Bread
/// └── Rust            (same name as the bar's link, different root)
/// Mobile bookmarks
/// └── Maps
/// ```
pub fn realistic_bookmarks() -> (TempDir, PathBuf) {
    BookmarkFileBuilder::new()
        .bookmark_bar(
            FolderBuilder::new("Bookmarks bar")
                .folder(
                    FolderBuilder::new("Work")
                        .url("Mail", "https://mail.example.com/")
                        .url("Calendar", "https://calendar.example.com/")
                        .folder(
                            FolderBuilder::new("Projects")
                                .url("Tracker", "https://tracker.example.com/")
                                .folder(
                                    FolderBuilder::new("Archive")
                                        .url("Old wiki", "https://wiki.example.com/old"),
                                ),
                        ),
                )
                .url("Rust", "https://www.rust-lang.org/")
                .url("News", "https://news.example.com/"),
        )
        .other(
            FolderBuilder::new("Other bookmarks")
                .folder(FolderBuilder::new("Recipes").url("Bread", "https://bread.example.com/"))
                .url("Rust", "https://doc.rust-lang.org/"),
        )
        .synced(FolderBuilder::new("Mobile bookmarks").url("Maps", "https://maps.example.com/"))
        .build()
}
