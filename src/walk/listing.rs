//! Directory listing: lazy enumeration of a directory's immediate children.
//!
//! `fs::read_dir` already excludes `.` and `..`, matching the accounting
//! rule that a directory's own entry is charged once, by whoever discovered
//! it, never again through its listing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{MduError, Result};

/// Open `dir` and return a lazy iterator over its immediate child paths.
///
/// The open itself can fail (permissions, concurrent deletion); individual
/// entries can also fail mid-iteration, which is where readdir/close errors
/// surface in Rust. Both carry the directory path for diagnostics.
pub fn list_children(dir: &Path) -> Result<impl Iterator<Item = Result<PathBuf>> + use<>> {
    let dir_owned = dir.to_path_buf();
    let entries = fs::read_dir(dir).map_err(|e| MduError::read_dir(dir, e))?;
    Ok(entries.map(move |entry| {
        entry
            .map(|e| e.path())
            .map_err(|e| MduError::DirEntry {
                path: dir_owned.clone(),
                source: e,
            })
    }))
}
