/// Find the 1-based line where `key_path` (e.g. `es.models.user.name`) is
/// defined in YAML `content`.
///
/// Searches for each key part in sequence, only descending into a key's block
/// while lines stay indented deeper than it. This finds `es.b.name` rather
/// than an earlier `es.a.name`. Comments, blank lines and document markers are
/// skipped. Flow mappings (`{a: b}`) are not looked into.
pub fn find_key_line(content: &str, key_path: &str) -> Option<usize> {
    let parts: Vec<&str> = key_path.split('.').collect();
    // Indentation of every matched ancestor.
    let mut matched_indents: Vec<usize> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("---") {
            continue;
        }
        let indent = line.len() - trimmed.len();

        // Leaving a matched block: anything at or left of its indentation.
        while matched_indents.last().is_some_and(|&last| indent <= last) {
            matched_indents.pop();
        }

        let depth = matched_indents.len();
        let Some(expected) = parts.get(depth) else {
            continue;
        };

        if line_key(trimmed) == Some(*expected) {
            if depth == parts.len() - 1 {
                return Some(index + 1);
            }
            matched_indents.push(indent);
        }
    }

    None
}

/// The mapping key a line defines, without quotes.
fn line_key(trimmed: &str) -> Option<&str> {
    let (key, _) = trimmed.split_once(':')?;
    let key = key.trim();
    let key = key
        .strip_prefix('"')
        .and_then(|k| k.strip_suffix('"'))
        .or_else(|| key.strip_prefix('\'').and_then(|k| k.strip_suffix('\'')))
        .unwrap_or(key);
    if key.is_empty() || key.starts_with('-') {
        None
    } else {
        Some(key)
    }
}
