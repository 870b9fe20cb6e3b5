use chrono::{DateTime, Local};

use crate::tree::views::FolderViews;

/// Index of a node inside its [`BookmarkTree`](crate::tree::BookmarkTree) arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One bookmark node as stored in the arena
#[derive(Debug)]
pub(crate) struct NodeRecord {
    pub id: i64,
    pub name: String,
    pub guid: String,
    pub date_added: DateTime<Local>,
    /// Non-owning upward link; `None` only for the tree root
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// Shared by every link record; a link has no children so its views stay empty
static LEAF_VIEWS: FolderViews = FolderViews::new();

#[derive(Debug)]
pub(crate) enum NodeKind {
    Link { url: String },
    Folder { children: Vec<NodeId>, views: FolderViews },
}

impl NodeRecord {
    pub(crate) fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Folder { children, .. } => children,
            NodeKind::Link { .. } => &[],
        }
    }

    /// Literal url of a link; empty for folders
    pub(crate) fn url(&self) -> &str {
        match &self.kind {
            NodeKind::Link { url } => url,
            NodeKind::Folder { .. } => "",
        }
    }

    pub(crate) fn views(&self) -> &FolderViews {
        match &self.kind {
            NodeKind::Folder { views, .. } => views,
            NodeKind::Link { .. } => &LEAF_VIEWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(kind: NodeKind) -> NodeRecord {
        NodeRecord {
            id: 1,
            name: "node".to_string(),
            guid: "g".to_string(),
            date_added: Local.timestamp_opt(0, 0).unwrap(),
            parent: None,
            kind,
        }
    }

    #[test]
    fn test_link_record_accessors() {
        let link = record(NodeKind::Link { url: "https://example.com/".to_string() });
        assert!(!link.is_folder());
        assert!(link.children().is_empty());
        assert_eq!(link.url(), "https://example.com/");
        assert!(std::ptr::eq(link.views(), &LEAF_VIEWS));
    }

    #[test]
    fn test_folder_record_accessors() {
        let folder = record(NodeKind::Folder {
            children: vec![NodeId(1), NodeId(2)],
            views: FolderViews::default(),
        });
        assert!(folder.is_folder());
        assert_eq!(folder.children(), &[NodeId(1), NodeId(2)]);
        assert_eq!(folder.url(), "");
        assert!(!std::ptr::eq(folder.views(), &LEAF_VIEWS));
    }
}
