use crate::error::Result;
use std::fs;
use std::path::Path;

/// Reads a file into newline-inclusive line segments.
///
/// Each segment keeps its trailing `\n` (and the `\r` before it, for CRLF
/// files); the final segment may lack one. An empty file yields an empty
/// vector.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_inclusive('\n').map(str::to_string).collect())
}

/// Overwrites the file at `path` with the concatenated segments.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat())?;
    Ok(())
}
