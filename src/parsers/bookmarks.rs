use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{BookmarkError, Result};
use crate::models::node::{NodeId, NodeKind, NodeRecord};
use crate::models::roots::{BookmarkRoots, ROOT_SECTIONS};
use crate::parsers::timestamps::parse_webkit_value;
use crate::tree::BookmarkTree;
use crate::tree::views::FolderViews;
use crate::utils::{resolve_bookmarks_path, validate_file_size};

const TYPE_URL: &str = "url";
const TYPE_FOLDER: &str = "folder";

/// Deepest folder nesting accepted below a root section
pub const MAX_FOLDER_DEPTH: usize = 200;

/// Deepest JSON nesting accepted in bookmark text. Each folder costs two
/// levels (its object and its `children` array); the document, `roots`,
/// section and `meta_info` objects add a few more.
pub const MAX_JSON_DEPTH: usize = 2 * MAX_FOLDER_DEPTH + 8;

/// Build one tree from a JSON node object (`parent = None`)
///
/// Nodes whose `type` is `"url"` become links; every other `type` is treated as
/// a folder. The top-level node itself must be a folder.
pub fn build_tree(node: &Value, browser: &str) -> Result<BookmarkTree> {
    build_tree_at(node, browser, "root")
}

fn build_tree_at(node: &Value, browser: &str, context: &str) -> Result<BookmarkTree> {
    let mut builder = TreeBuilder { browser, nodes: Vec::new() };
    let root = builder.build_node(node, None, context, 0)?;
    if !builder.nodes[root.index()].is_folder() {
        return Err(BookmarkError::malformed(context, "top-level bookmark node must be a folder"));
    }
    debug!(context, nodes = builder.nodes.len(), "Built bookmark tree");
    Ok(BookmarkTree::from_records(browser.to_string(), builder.nodes))
}

/// Recursive JSON-to-arena builder. Parents are allocated before their
/// children so each child can record its parent's id; the finished child id
/// list is attached once the recursion returns.
struct TreeBuilder<'b> {
    browser: &'b str,
    nodes: Vec<NodeRecord>,
}

impl TreeBuilder<'_> {
    fn build_node(
        &mut self,
        value: &Value,
        parent: Option<NodeId>,
        context: &str,
        depth: usize,
    ) -> Result<NodeId> {
        let obj = value
            .as_object()
            .ok_or_else(|| BookmarkError::malformed(context, "expected a JSON object"))?;

        let name = required_str(obj, "name", context)?.to_string();
        let guid = required_str(obj, "guid", context)?.to_string();
        let id = parse_id(obj, context)?;
        let date_added = parse_webkit_value(required(obj, "date_added", context)?)?;
        let node_type = required_str(obj, "type", context)?;

        let node = u32::try_from(self.nodes.len())
            .map(NodeId)
            .map_err(|_| BookmarkError::malformed(context, "too many bookmark nodes"))?;

        if node_type == TYPE_URL {
            let url = required_str(obj, "url", context)?.to_string();
            self.nodes.push(NodeRecord {
                id,
                name,
                guid,
                date_added,
                parent,
                kind: NodeKind::Link { url },
            });
            return Ok(node);
        }

        if depth > MAX_FOLDER_DEPTH {
            return Err(BookmarkError::malformed(
                context,
                format!("folders nested deeper than {} levels", MAX_FOLDER_DEPTH),
            ));
        }

        if node_type != TYPE_FOLDER {
            warn!(context, node_type, browser = self.browser, "Unknown bookmark type, treating as folder");
        }

        let children = required(obj, "children", context)?
            .as_array()
            .ok_or_else(|| BookmarkError::malformed(context, "field \"children\" must be an array"))?;

        self.nodes.push(NodeRecord {
            id,
            name,
            guid,
            date_added,
            parent,
            kind: NodeKind::Folder { children: Vec::new(), views: FolderViews::default() },
        });

        let mut child_ids = Vec::with_capacity(children.len());
        for (index, child) in children.iter().enumerate() {
            let child_context = match child.get("name").and_then(Value::as_str) {
                Some(child_name) => format!("{}/{}", context, child_name),
                None => format!("{}/children[{}]", context, index),
            };
            child_ids.push(self.build_node(child, Some(node), &child_context, depth + 1)?);
        }

        if let NodeKind::Folder { children, .. } = &mut self.nodes[node.index()].kind {
            *children = child_ids;
        }
        Ok(node)
    }
}

fn required<'v>(obj: &'v Map<String, Value>, field: &str, context: &str) -> Result<&'v Value> {
    obj.get(field)
        .ok_or_else(|| BookmarkError::malformed(context, format!("missing field \"{}\"", field)))
}

fn required_str<'v>(obj: &'v Map<String, Value>, field: &str, context: &str) -> Result<&'v str> {
    required(obj, field, context)?.as_str().ok_or_else(|| {
        BookmarkError::malformed(context, format!("field \"{}\" must be a string", field))
    })
}

/// Chromium writes ids as strings ("1"); plain integers are accepted too
fn parse_id(obj: &Map<String, Value>, context: &str) -> Result<i64> {
    let parsed = match required(obj, "id", context)? {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed.ok_or_else(|| BookmarkError::malformed(context, "field \"id\" must be an integer"))
}

/// Parse an already-loaded bookmark document into its three root trees
///
/// The document must carry a `roots` object with `bookmark_bar`, `other` and
/// `synced` sections. Any structural error aborts the whole parse.
pub fn parse_bookmarks_value(document: &Value, browser: &str) -> Result<BookmarkRoots> {
    let roots = document
        .get("roots")
        .ok_or_else(|| BookmarkError::malformed("document", "missing field \"roots\""))?
        .as_object()
        .ok_or_else(|| BookmarkError::malformed("document", "field \"roots\" must be an object"))?;

    let [bookmark_bar, other, synced] = ROOT_SECTIONS.map(|section| {
        let context = format!("roots.{}", section);
        let node = roots.get(section).ok_or_else(|| {
            BookmarkError::malformed("roots", format!("missing section \"{}\"", section))
        })?;
        build_tree_at(node, browser, &context)
    });

    Ok(BookmarkRoots::new(bookmark_bar?, other?, synced?))
}

/// Parse bookmark JSON text
///
/// Documents nested deeper than [`MAX_JSON_DEPTH`] are rejected with
/// [`BookmarkError::MalformedBookmarkData`] before deserialization starts.
pub fn parse_bookmarks_str(json: &str, browser: &str) -> Result<BookmarkRoots> {
    check_nesting_depth(json)?;

    // serde_json's own limit of 128 would reject about 60 nested folders;
    // the scan above bounds the recursion instead.
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let document = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;

    parse_bookmarks_value(&document, browser)
}

/// Reject text whose arrays and objects nest deeper than [`MAX_JSON_DEPTH`].
/// Brackets inside string literals are ignored; syntax errors are left to the
/// JSON parser.
fn check_nesting_depth(json: &str) -> Result<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > MAX_JSON_DEPTH {
                    return Err(BookmarkError::malformed(
                        "document",
                        format!("JSON nested deeper than {} levels", MAX_JSON_DEPTH),
                    ));
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Read and parse a bookmark file
///
/// The whole file is read before any tree building starts.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`BookmarkError::PathNotFound`])
/// - The file is larger than the size limit or cannot be read
/// - The content is not valid JSON or not a valid bookmark document
pub fn parse_bookmarks_file(path: &Path, browser: &str) -> Result<BookmarkRoots> {
    let io_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => BookmarkError::PathNotFound(path.to_path_buf()),
        _ => BookmarkError::Io { path: path.to_path_buf(), source },
    };

    let mut file = File::open(path).map_err(io_error)?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "Read bookmark file");

    parse_bookmarks_str(&contents, browser)
}

/// Locate the bookmark file for `browser` (or use `explicit`) and parse it
///
/// # Examples
///
/// ```no_run
/// use bookmark_parser::{BookmarkNode, load_bookmarks};
///
/// let roots = load_bookmarks("chrome", None)?;
/// println!("{} urls on the bookmark bar", roots.bookmark_bar().num_urls());
/// # Ok::<(), bookmark_parser::BookmarkError>(())
/// ```
pub fn load_bookmarks(browser: &str, explicit: Option<&Path>) -> Result<BookmarkRoots> {
    let path = resolve_bookmarks_path(browser, explicit)?;
    parse_bookmarks_file(&path, browser)
}
