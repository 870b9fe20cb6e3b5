//! Bookmark Parser - Read Chromium-family bookmark files as queryable trees
//!
//! This library parses the `Bookmarks` JSON file written by Chrome, Brave and
//! other Chromium-based browsers. It supports:
//!
//! - Locating the default bookmark file per browser and platform
//! - Building immutable folder/link trees for the `bookmark_bar`, `other` and
//!   `synced` roots, with parent links for path queries
//! - Cached folder aggregates: direct and nested urls, subfolders, counts
//! - Name-based lookup and `/`-separated path resolution
//!
//! # Example
//!
//! ```no_run
//! use bookmark_parser::{BookmarkNode, load_bookmarks};
//!
//! let roots = load_bookmarks("chrome", None)?;
//! for folder in roots.bookmark_bar().subfolders() {
//!     println!("{} ({} urls)", folder.path(), folder.num_urls());
//! }
//! # Ok::<(), bookmark_parser::BookmarkError>(())
//! ```

pub mod cache;
pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod tree;
pub mod utils;

// Re-export commonly used types
pub use cache::BookmarkCache;
pub use error::{BookmarkError, Result};
pub use models::{BookmarkRoots, Browser};
pub use parsers::{load_bookmarks, parse_bookmarks_file, parse_bookmarks_str, parse_bookmarks_value};
pub use tree::{Bookmark, BookmarkNode, BookmarkTree, Folder, Link};
pub use utils::resolve_bookmarks_path;
