pub mod environment;
pub mod paths;

pub use environment::get_home_dir;
pub use paths::{
    bookmarks_path_under, default_bookmarks_path, expand_tilde, format_path_with_tilde,
    resolve_bookmarks_path, validate_file_size,
};
