//! Plain-text working list (`words.txt`).

use super::WordSet;
use crate::error::{MergeError, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const UTF8_BOM: char = '\u{feff}';

/// Read the working list as raw lines, terminators stripped.
pub fn read_working_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::from_read(path, e))?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Replace the file at `path` with `words`, one per line.
///
/// The list is written to a temporary file next to `path` and renamed over
/// it, so a failed write leaves the previous contents in place. A symlinked
/// list is resolved first and its target is the file replaced.
pub fn write_working_list(path: &Path, words: &WordSet) -> Result<()> {
    let target = resolve_target(path)?;
    let parent_dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| MergeError::write(path, e))?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        for word in words.iter() {
            writeln!(writer, "{word}").map_err(|e| MergeError::write(path, e))?;
        }
        writer.flush().map_err(|e| MergeError::write(path, e))?;
    }

    // NamedTempFile is created owner-only; keep whatever mode the list had.
    if let Ok(metadata) = fs::metadata(&target) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| MergeError::write(path, e))?;
    }

    temp_file.persist(&target).map_err(|e| MergeError::write(path, e.error))?;
    tracing::debug!("Wrote {} words to {}", words.len(), target.display());
    Ok(())
}

/// Follow symlinks to the file that holds the list. A path with nothing
/// behind it yet is used as given.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(MergeError::write(path, e)),
    }
}
