//! Typed handles into a [`BookmarkTree`] and the derived views over folders
//!
//! Every derived view is memoized per folder in a [`OnceLock`], so repeated
//! calls return the same result and the tree stays `Send + Sync`.

use std::collections::HashMap;
use std::fmt;
use std::ptr;
use std::sync::OnceLock;

use chrono::{DateTime, Local};

use crate::error::{BookmarkError, Result};
use crate::models::node::{NodeId, NodeKind, NodeRecord};
use crate::tree::arena::BookmarkTree;

/// Lazily computed aggregates of one folder's subtree
#[derive(Debug, Default)]
pub(crate) struct FolderViews {
    folders: OnceLock<Vec<NodeId>>,
    urls: OnceLock<Vec<NodeId>>,
    nested_urls: OnceLock<Vec<NodeId>>,
    subfolders: OnceLock<Vec<NodeId>>,
    num_urls: OnceLock<usize>,
    num_subfolders: OnceLock<usize>,
    by_name: OnceLock<HashMap<String, Vec<NodeId>>>,
}

impl FolderViews {
    pub(crate) const fn new() -> Self {
        Self {
            folders: OnceLock::new(),
            urls: OnceLock::new(),
            nested_urls: OnceLock::new(),
            subfolders: OnceLock::new(),
            num_urls: OnceLock::new(),
            num_subfolders: OnceLock::new(),
            by_name: OnceLock::new(),
        }
    }
}

/// Fields and navigation shared by folders and links
pub trait BookmarkNode<'t> {
    fn tree(&self) -> &'t BookmarkTree;

    fn node_id(&self) -> NodeId;

    /// Identity number from the bookmark file
    fn id(&self) -> i64 {
        self.tree().record(self.node_id()).id
    }

    fn name(&self) -> &'t str {
        &self.tree().record(self.node_id()).name
    }

    fn guid(&self) -> &'t str {
        &self.tree().record(self.node_id()).guid
    }

    fn browser(&self) -> &'t str {
        self.tree().browser()
    }

    fn date_added(&self) -> DateTime<Local> {
        self.tree().record(self.node_id()).date_added
    }

    fn parent(&self) -> Option<Folder<'t>> {
        let tree = self.tree();
        tree.record(self.node_id()).parent.map(|p| Folder::new(tree, p))
    }

    fn is_folder(&self) -> bool {
        self.tree().record(self.node_id()).is_folder()
    }

    /// `/`-joined names from the root down to this node, root first
    fn path(&self) -> String {
        let tree = self.tree();
        let mut parts = Vec::new();
        let mut current = Some(self.node_id());
        while let Some(node) = current {
            let record = tree.record(node);
            parts.push(record.name.as_str());
            current = record.parent;
        }
        parts.reverse();
        parts.join("/")
    }
}

/// A folder node
#[derive(Clone, Copy)]
pub struct Folder<'t> {
    tree: &'t BookmarkTree,
    node: NodeId,
}

/// A link (url) node
#[derive(Clone, Copy)]
pub struct Link<'t> {
    tree: &'t BookmarkTree,
    node: NodeId,
}

/// Either kind of node
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Bookmark<'t> {
    Folder(Folder<'t>),
    Link(Link<'t>),
}

impl<'t> Bookmark<'t> {
    pub(crate) fn new(tree: &'t BookmarkTree, node: NodeId) -> Self {
        match tree.record(node).kind {
            NodeKind::Folder { .. } => Bookmark::Folder(Folder { tree, node }),
            NodeKind::Link { .. } => Bookmark::Link(Link { tree, node }),
        }
    }

    pub fn as_folder(&self) -> Option<Folder<'t>> {
        match self {
            Bookmark::Folder(f) => Some(*f),
            Bookmark::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<Link<'t>> {
        match self {
            Bookmark::Link(l) => Some(*l),
            Bookmark::Folder(_) => None,
        }
    }

    /// Literal URL for links, synthesized `{browser}://bookmarks/?id={id}` for folders
    pub fn url(&self) -> String {
        match self {
            Bookmark::Folder(f) => f.url(),
            Bookmark::Link(l) => l.url().to_string(),
        }
    }
}

impl<'t> BookmarkNode<'t> for Bookmark<'t> {
    fn tree(&self) -> &'t BookmarkTree {
        match self {
            Bookmark::Folder(f) => f.tree,
            Bookmark::Link(l) => l.tree,
        }
    }

    fn node_id(&self) -> NodeId {
        match self {
            Bookmark::Folder(f) => f.node,
            Bookmark::Link(l) => l.node,
        }
    }
}

impl<'t> BookmarkNode<'t> for Folder<'t> {
    fn tree(&self) -> &'t BookmarkTree {
        self.tree
    }

    fn node_id(&self) -> NodeId {
        self.node
    }
}

impl<'t> BookmarkNode<'t> for Link<'t> {
    fn tree(&self) -> &'t BookmarkTree {
        self.tree
    }

    fn node_id(&self) -> NodeId {
        self.node
    }
}

impl<'t> Link<'t> {
    pub fn url(&self) -> &'t str {
        self.tree.record(self.node).url()
    }

    /// Path of the containing folder
    pub fn dir_path(&self) -> String {
        self.parent().map(|p| p.path()).unwrap_or_default()
    }
}

impl<'t> Folder<'t> {
    /// `node` must be a folder record: the tree root, a parent, or an id taken
    /// from a folder view. A link record behaves as an empty folder.
    pub(crate) fn new(tree: &'t BookmarkTree, node: NodeId) -> Self {
        Self { tree, node }
    }

    fn record(&self) -> &'t NodeRecord {
        self.tree.record(self.node)
    }

    fn views(&self) -> &'t FolderViews {
        self.record().views()
    }

    fn folder_ids(&self) -> &'t [NodeId] {
        self.views().folders.get_or_init(|| {
            self.child_ids().iter().copied().filter(|&c| self.tree.record(c).is_folder()).collect()
        })
    }

    fn url_ids(&self) -> &'t [NodeId] {
        self.views().urls.get_or_init(|| {
            self.child_ids().iter().copied().filter(|&c| !self.tree.record(c).is_folder()).collect()
        })
    }

    fn nested_url_ids(&self) -> &'t [NodeId] {
        self.views().nested_urls.get_or_init(|| {
            let mut ids = self.url_ids().to_vec();
            for folder in self.folders() {
                ids.extend_from_slice(folder.nested_url_ids());
            }
            ids
        })
    }

    fn subfolder_ids(&self) -> &'t [NodeId] {
        self.views().subfolders.get_or_init(|| {
            let mut ids = self.folder_ids().to_vec();
            for folder in self.folders() {
                ids.extend_from_slice(folder.subfolder_ids());
            }
            ids
        })
    }

    fn folder_handles(&self, ids: &'t [NodeId]) -> Vec<Folder<'t>> {
        ids.iter().map(|&node| Folder::new(self.tree, node)).collect()
    }

    fn link_handles(&self, ids: &'t [NodeId]) -> Vec<Link<'t>> {
        ids.iter().map(|&node| Link { tree: self.tree, node }).collect()
    }

    pub(crate) fn child_ids(&self) -> &'t [NodeId] {
        self.record().children()
    }

    /// Synthesized browser URL of this folder, e.g. `chrome://bookmarks/?id=1`
    pub fn url(&self) -> String {
        format!("{}://bookmarks/?id={}", self.tree.browser(), self.id())
    }

    /// All direct children in file order
    pub fn children(&self) -> impl Iterator<Item = Bookmark<'t>> + use<'t> {
        let tree = self.tree;
        self.child_ids().iter().map(move |&node| Bookmark::new(tree, node))
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.child_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.child_ids().is_empty()
    }

    /// Direct child folders, in child order
    pub fn folders(&self) -> Vec<Folder<'t>> {
        self.folder_handles(self.folder_ids())
    }

    /// Direct child links, in child order
    pub fn urls(&self) -> Vec<Link<'t>> {
        self.link_handles(self.url_ids())
    }

    /// This folder's links followed by the nested links of each subfolder, depth-first
    pub fn nested_urls(&self) -> Vec<Link<'t>> {
        self.link_handles(self.nested_url_ids())
    }

    /// Every descendant folder: direct folders first, then each one's subfolders
    pub fn subfolders(&self) -> Vec<Folder<'t>> {
        self.folder_handles(self.subfolder_ids())
    }

    /// Count of every link in the subtree, nested folders included
    pub fn num_urls(&self) -> usize {
        *self.views().num_urls.get_or_init(|| {
            self.url_ids().len() + self.folders().iter().map(Folder::num_urls).sum::<usize>()
        })
    }

    /// Count of direct child folders only
    pub fn num_folders(&self) -> usize {
        self.folder_ids().len()
    }

    /// Count of every descendant folder, excluding this one
    pub fn num_subfolders(&self) -> usize {
        *self.views().num_subfolders.get_or_init(|| {
            self.folders().iter().map(|f| f.num_subfolders() + 1).sum()
        })
    }

    fn name_index(&self) -> &'t HashMap<String, Vec<NodeId>> {
        self.views().by_name.get_or_init(|| {
            let mut index: HashMap<String, Vec<NodeId>> = HashMap::new();
            for &child in self.child_ids() {
                index.entry(self.tree.record(child).name.clone()).or_default().push(child);
            }
            index
        })
    }

    /// The unique direct child with the given name
    ///
    /// # Errors
    ///
    /// - [`BookmarkError::NotFound`] if no child has that name
    /// - [`BookmarkError::AmbiguousName`] if more than one child has it
    pub fn get(&self, name: &str) -> Result<Bookmark<'t>> {
        match self.name_index().get(name).map(Vec::as_slice).unwrap_or_default() {
            [] => Err(BookmarkError::not_found(name)),
            [only] => Ok(Bookmark::new(self.tree, *only)),
            many => {
                Err(BookmarkError::AmbiguousName { name: name.to_string(), count: many.len() })
            }
        }
    }

    /// Resolve a `/`-separated path relative to this folder, one [`Folder::get`]
    /// per segment. Empty segments are ignored, so `""` resolves to this folder.
    pub fn resolve(&self, path: &str) -> Result<Bookmark<'t>> {
        let mut current = Bookmark::Folder(*self);
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let folder = current.as_folder().ok_or_else(|| BookmarkError::not_found(segment))?;
            current = folder.get(segment)?;
        }
        Ok(current)
    }
}

impl<'t> IntoIterator for Folder<'t> {
    type Item = Bookmark<'t>;
    type IntoIter = Box<dyn Iterator<Item = Bookmark<'t>> + 't>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.children())
    }
}

impl PartialEq for Folder<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl Eq for Folder<'_> {}

impl PartialEq for Link<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl Eq for Link<'_> {}

impl fmt::Debug for Folder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Folder")
            .field("id", &self.id())
            .field("path", &self.path())
            .field("children", &self.len())
            .finish()
    }
}

impl fmt::Debug for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("id", &self.id())
            .field("path", &self.path())
            .field("url", &self.url())
            .finish()
    }
}

impl fmt::Debug for Bookmark<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bookmark::Folder(folder) => fmt::Debug::fmt(folder, f),
            Bookmark::Link(link) => fmt::Debug::fmt(link, f),
        }
    }
}
