//! Utilities for input path expansion and display helpers.

use std::path::PathBuf;

/// Expand command-line inputs into paths, keeping their order.
///
/// An argument that names an existing path, or contains no glob
/// metacharacters, is kept verbatim. Otherwise it is treated as a glob
/// pattern and replaced by its matches in sorted order. A pattern with no
/// matches, or one that is not a valid pattern, is kept verbatim so the
/// merger reports it as a skipped input.
pub fn expand_input_patterns<T>(inputs: T) -> Vec<PathBuf>
where
    T: IntoIterator,
    T::Item: Into<PathBuf>,
{
    let mut resolved_paths = Vec::new();

    for input in inputs {
        let literal: PathBuf = input.into();

        let pattern = match literal.to_str() {
            Some(pattern) if has_glob_metachars(pattern) && !literal.exists() => pattern,
            _ => {
                resolved_paths.push(literal);
                continue;
            }
        };

        match collect_paths_for_pattern(pattern) {
            Some(matches) if !matches.is_empty() => resolved_paths.extend(matches),
            _ => resolved_paths.push(literal),
        }
    }

    resolved_paths
}

fn has_glob_metachars(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Sorted matches of `pattern`, or `None` if it is not a valid pattern.
fn collect_paths_for_pattern(pattern: &str) -> Option<Vec<PathBuf>> {
    let paths = glob::glob(pattern).ok()?;

    // Unreadable directory entries are dropped, same as a shell would.
    let mut matches: Vec<PathBuf> = paths.filter_map(|entry| entry.ok()).collect();
    matches.sort();
    Some(matches)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
