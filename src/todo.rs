//! Rebase instruction relabeling.
//!
//! Flips `pick` to `reword` for the commits whose subjects need a manual
//! pass during an interactive rebase. Every other line is copied through
//! untouched, in order.

use crate::error::Result;
use crate::file::{read_lines, write_lines};
use std::path::Path;

const PICK: &str = "pick ";
const REWORD: &str = "reword ";

/// Subjects whose commits get opened for rewording.
pub const MARKERS: [&str; 4] = [
    "Visual polish",
    "Correct Step",
    "Stabilize Tape",
    "Finalize Tape",
];

/// Relabels a `pick` instruction to `reword` when the line mentions one of
/// the marker subjects.
///
/// Matching is plain substring containment anywhere in the line. Only the
/// leading `"pick "` token is replaced. Returns `None` for lines to copy
/// unchanged.
pub fn reword_pick(line: &str) -> Option<String> {
    if !line.starts_with(PICK) {
        return None;
    }
    if !MARKERS.iter().any(|marker| line.contains(marker)) {
        return None;
    }
    Some(line.replacen(PICK, REWORD, 1))
}

/// Rewrites the rebase instruction list at `path` in place.
pub fn apply(path: &Path) -> Result<()> {
    let lines = read_lines(path)?;
    let rewritten: Vec<String> = lines
        .into_iter()
        .map(|line| reword_pick(&line).unwrap_or(line))
        .collect();
    write_lines(path, &rewritten)
}
