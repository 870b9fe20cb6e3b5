//! Parsers for Chromium-family bookmark files
//!
//! # Error Handling Strategy
//!
//! Unlike line-oriented logs, a bookmark file is one JSON document describing a
//! single tree, so there is nothing to skip past:
//!
//! - **Structural errors abort the parse**: a missing or mistyped field anywhere
//!   in the tree yields [`BookmarkError::MalformedBookmarkData`] naming the node
//!   path, and no partial tree is returned.
//!
//! - **Nesting limits**: folders nested deeper than
//!   [`bookmarks::MAX_FOLDER_DEPTH`] are reported as malformed data, as is
//!   JSON text nested deeper than [`bookmarks::MAX_JSON_DEPTH`].
//!
//! - **Timestamps**: a `date_added` that is not an integer yields
//!   [`BookmarkError::InvalidTimestamp`].
//!
//! - **Tolerated anomalies**: a node `type` other than `"url"`/`"folder"` is
//!   treated as a folder and logged with `tracing::warn!`.
//!
//! [`BookmarkError::MalformedBookmarkData`]: crate::BookmarkError::MalformedBookmarkData
//! [`BookmarkError::InvalidTimestamp`]: crate::BookmarkError::InvalidTimestamp

pub mod bookmarks;
pub mod timestamps;

pub use bookmarks::{
    build_tree, load_bookmarks, parse_bookmarks_file, parse_bookmarks_str, parse_bookmarks_value,
};
pub use timestamps::{webkit_micros_to_utc, webkit_timestamp_to_local};
