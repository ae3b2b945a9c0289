//! Path mapping module
//!
//! Turns logical paths into the file paths the router probes and executes.
//! Plain string concatenation: no separators are inserted, nothing is sanitized.

use std::borrow::Cow;

/// Segment appended to directory-style requests (`/blog/` -> `/blog/index`)
pub const INDEX_SEGMENT: &str = "index";

/// Normalize a logical path
///
/// # Examples
/// ```
/// use file_router::router::normalize_path;
/// assert_eq!(normalize_path("/blog/"), "/blog/index");
/// assert_eq!(normalize_path("/blog"), "/blog");
/// ```
pub fn normalize_path(url_path: &str) -> Cow<'_, str> {
    if url_path.ends_with('/') {
        Cow::Owned(format!("{url_path}{INDEX_SEGMENT}"))
    } else {
        Cow::Borrowed(url_path)
    }
}

/// Controller file for a normalized path: `root + path + extension`
pub fn primary_path(controller_root: &str, normalized_path: &str, extension: &str) -> String {
    format!("{controller_root}{normalized_path}{extension}")
}

/// View file for a normalized path: `root + path + suffix + extension`
pub fn view_path(
    controller_root: &str,
    normalized_path: &str,
    view_suffix: &str,
    extension: &str,
) -> String {
    format!("{controller_root}{normalized_path}{view_suffix}{extension}")
}
