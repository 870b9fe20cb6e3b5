//! Arena storage for one bookmark tree
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]:
//! folders own their children through `children` index lists, children point
//! back up through `parent`. Nothing is mutated once the builder hands the
//! arena over, so upward navigation needs no `Rc`/`Weak` bookkeeping.
//!
//! ```text
//! nodes: [root][child 0][grandchild 0][child 1]...
//!          ^ NodeId::ROOT, always a folder
//! ```

use std::fmt;

use crate::models::node::{NodeId, NodeKind, NodeRecord};
use crate::tree::views::{Bookmark, BookmarkNode, Folder};

/// An immutable bookmark tree rooted at a folder
pub struct BookmarkTree {
    browser: String,
    nodes: Vec<NodeRecord>,
}

impl BookmarkTree {
    /// Seal a finished arena. The builder guarantees that `nodes[0]` is a
    /// folder and that every parent/child index is in bounds.
    pub(crate) fn from_records(browser: String, nodes: Vec<NodeRecord>) -> Self {
        debug_assert!(nodes.first().is_some_and(NodeRecord::is_folder));
        Self { browser, nodes }
    }

    pub(crate) fn record(&self, node: NodeId) -> &NodeRecord {
        &self.nodes[node.index()]
    }

    /// Browser tag shared by every node of this tree
    pub fn browser(&self) -> &str {
        &self.browser
    }

    /// The root folder
    pub fn root(&self) -> Folder<'_> {
        Folder::new(self, NodeId::ROOT)
    }

    /// Node by arena id, if it exists
    pub fn get(&self, node: NodeId) -> Option<Bookmark<'_>> {
        (node.index() < self.nodes.len()).then(|| Bookmark::new(self, node))
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first, pre-order walk over every node (root first, children in order)
    pub fn iter(&self) -> impl Iterator<Item = Bookmark<'_>> + '_ {
        let mut stack = vec![NodeId::ROOT];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            // Reverse so children come off the stack left-to-right
            stack.extend(self.record(node).children().iter().rev().copied());
            Some(Bookmark::new(self, node))
        })
    }

    /// Find the first node (pre-order) carrying the given bookmark id
    pub fn find_by_id(&self, id: i64) -> Option<Bookmark<'_>> {
        self.iter().find(|b| b.id() == id)
    }
}

impl fmt::Debug for BookmarkTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links = self.nodes.iter().filter(|n| matches!(n.kind, NodeKind::Link { .. })).count();
        f.debug_struct("BookmarkTree")
            .field("browser", &self.browser)
            .field("root", &self.record(NodeId::ROOT).name)
            .field("nodes", &self.nodes.len())
            .field("links", &links)
            .finish()
    }
}
