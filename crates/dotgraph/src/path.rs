//! Dot-delimited path strings.

/// A single segment of a dot path.
pub type PathStep = String;

/// A parsed dot path.
pub type Path = Vec<PathStep>;

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Split a dot path into its segments.
///
/// The empty string has no segments. Empty segments elsewhere are kept and
/// name the empty key, so `"a."` is `["a", ""]`.
///
/// # Example
///
/// ```
/// use dotgraph::parse_path;
///
/// assert_eq!(parse_path("address.city"), vec!["address", "city"]);
/// assert_eq!(parse_path("phoneNumber.1.type"), vec!["phoneNumber", "1", "type"]);
/// assert!(parse_path("").is_empty());
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Join segments back into a dot path.
pub fn format_path<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::new();
    for (idx, step) in path.iter().enumerate() {
        if idx > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(step.as_ref());
    }
    out
}

/// Dot path of the first `len` segments, clamped to the path length.
pub(crate) fn prefix(path: &[String], len: usize) -> String {
    format_path(&path[..len.min(path.len())])
}
