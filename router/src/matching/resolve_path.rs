/// Canonicalizes a raw path string.
///
/// Surrounding whitespace is trimmed, runs of `/` collapse into one, any
/// trailing `/` is dropped and a single leading `/` is ensured. The root is
/// always `"/"`. Normalizing twice gives the same result as normalizing once.
///
/// Whitespace and separators are trimmed from the ends together, so
/// `"a /"` becomes `"/a"` rather than `"/a "`.
pub fn normalize_path(path: &str) -> String {
    let segments = split_path(path);
    let mut normalized = String::with_capacity(path.len() + 1);
    if segments.is_empty() {
        normalized.push('/');
    }
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}

/// Splits a raw path into its non-empty segments, in order.
///
/// `normalize_path(p)` is exactly `"/"` followed by these segments joined with
/// `/`, so this never disagrees with [`normalize_path`].
pub fn split_path(path: &str) -> Vec<&str> {
    path.trim_matches(|c: char| c == '/' || c.is_whitespace())
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Drops empty entries from an already-segmented path, keeping the order of
/// the rest.
pub fn normalize_segments<I, S>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter(|segment| !segment.as_ref().is_empty())
        .map(|segment| segment.as_ref().to_string())
        .collect()
}

/// Resolves a child template against its parent's absolute template.
///
/// A child starting with `/` is absolute: the parent is ignored and the child
/// is normalized on its own. Anything else is appended to the parent with a
/// single `/` and the result normalized.
pub fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize_path(child)
    } else {
        let mut joined = String::with_capacity(parent.len() + child.len() + 1);
        joined.push_str(parent);
        joined.push('/');
        joined.push_str(child);
        normalize_path(&joined)
    }
}
