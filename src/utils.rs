//! Common utility functions shared across the codebase.

use std::path::{MAIN_SEPARATOR_STR, is_separator};

/// Lexically clean a path for display.
///
/// Runs of separators collapse into one, `.` segments are dropped and `..`
/// removes the segment before it. A rooted path never climbs above the root; a
/// relative path keeps its leading `..`. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use todox::utils::clean_path;
///
/// assert_eq!(clean_path("src//./a/../b.ts"), "src/b.ts");
/// assert_eq!(clean_path("../x/./y"), "../x/y");
/// assert_eq!(clean_path("/../a"), "/a");
/// assert_eq!(clean_path(""), ".");
/// ```
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with(is_separator);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if !rooted => segments.push(".."),
                _ => {}
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join(MAIN_SEPARATOR_STR);
    if rooted {
        format!("{}{}", MAIN_SEPARATOR_STR, joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
