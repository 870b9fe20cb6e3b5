//! Data models for parsed bookmark files.
//!
//! - [`Browser`] - browsers with a known default bookmark file location
//! - [`NodeId`] - index of a node inside its tree arena
//! - [`BookmarkRoots`] - the `bookmark_bar` / `other` / `synced` trees of one file
//!
//! Node records themselves are crate-private; callers navigate through the
//! handles in [`crate::tree`].

pub mod browser;
pub mod node;
pub mod roots;

pub use browser::Browser;
pub use node::NodeId;
pub use roots::{BookmarkRoots, ROOT_SECTIONS};
