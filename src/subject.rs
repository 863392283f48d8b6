//! Commit subject downcasing.
//!
//! Summary lines follow the `<prefix>: <description>` convention. When the
//! description starts with a capitalized word the hook lowercases its first
//! character and leaves everything else alone.

use crate::error::{HookError, Result};
use crate::file::{read_lines, write_lines};
use std::path::Path;

const SEPARATOR: &str = ": ";

/// Lowercases the first character after the `": "` separator.
///
/// Splits at the first separator occurrence only. Returns `None` when the
/// line has no separator or nothing follows it. The input line keeps its
/// trailing newline, so a bare `"Fix: \n"` remainder is just `"\n"` and the
/// rebuilt line comes back byte-identical.
pub fn downcase_after_prefix(line: &str) -> Option<String> {
    let (prefix, rest) = line.split_once(SEPARATOR)?;
    let mut chars = rest.chars();
    let first = chars.next()?;

    let mut out = String::with_capacity(line.len());
    out.push_str(prefix);
    out.push_str(SEPARATOR);
    out.extend(first.to_lowercase());
    out.push_str(chars.as_str());
    Some(out)
}

/// Rewrites the first line of the commit message at `path` in place.
///
/// A zero-line file is a precondition violation: there is no summary line to
/// rewrite.
pub fn apply(path: &Path) -> Result<()> {
    let mut lines = read_lines(path)?;
    if lines.is_empty() {
        return Err(HookError::EmptyFile(path.to_path_buf()));
    }
    if let Some(rewritten) = downcase_after_prefix(&lines[0]) {
        lines[0] = rewritten;
    }
    write_lines(path, &lines)
}
