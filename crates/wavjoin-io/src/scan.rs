//! Directory listing of join candidates.

use crate::error::Error;
use crate::Result;
use std::path::Path;

/// Names of the regular files in `dir` whose extension is `extension`
/// (without the dot), sorted.
///
/// Directories and names that are not valid UTF-8 are skipped.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }

    names.sort();
    Ok(names)
}
