use std::sync::Arc;

/// Normalizes one list line into a domain entry.
///
/// The line is trimmed and lowercased. Blank lines and `#` comments yield
/// `None`. The same rule applies to the primary domain list and to filter
/// lists.
pub fn normalize_line(line: &str) -> Option<Arc<str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(Arc::from(line.to_lowercase()))
}

/// Parses newline-delimited list text, keeping input order and duplicates.
pub fn parse_domain_list(text: &str) -> Vec<Arc<str>> {
    text.lines().filter_map(normalize_line).collect()
}
