//! Size probe: allocation size and kind of a single filesystem object.
//!
//! Sizes are measured in 512-byte blocks as reported by the filesystem
//! (`st_blocks`), independent of logical byte length. Symlinks are probed
//! with `lstat` semantics: the link itself is measured, never its target.

use std::fs;
use std::path::Path;

use crate::core::errors::{MduError, Result};

/// Outcome of probing one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Allocated size in 512-byte blocks.
    pub blocks: u64,
    /// Whether the object is a directory (symlinks to directories are not).
    pub is_dir: bool,
}

/// Probe a path without following symlinks.
///
/// Errors carry the path and the OS reason; callers attribute size 0 to
/// paths that cannot be statted and keep going.
pub fn probe(path: &Path) -> Result<ProbeResult> {
    let meta = fs::symlink_metadata(path).map_err(|e| MduError::stat(path, e))?;
    Ok(ProbeResult {
        blocks: allocated_blocks(&meta),
        is_dir: meta.is_dir(),
    })
}

#[cfg(unix)]
fn allocated_blocks(meta: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    meta.blocks()
}

#[cfg(not(unix))]
fn allocated_blocks(meta: &fs::Metadata) -> u64 {
    // No st_blocks off Unix; approximate from the logical length.
    meta.len().div_ceil(512)
}
