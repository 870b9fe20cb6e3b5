//! Immutable bookmark trees and the read-only queries over them
//!
//! - [`BookmarkTree`] - arena holding one root folder and its descendants
//! - [`Folder`] / [`Link`] / [`Bookmark`] - borrowed handles into a tree
//! - [`BookmarkNode`] - accessors shared by every handle (name, path, parent, ...)
//!
//! Folder aggregates (`nested_urls`, `num_subfolders`, ...) are computed on first
//! use and cached inside the tree.

pub mod arena;
pub mod render;
pub mod views;

pub use arena::BookmarkTree;
pub use views::{Bookmark, BookmarkNode, Folder, Link};
