//! Utilities for writing output files with automatic parent directory creation.

use std::fs;
use std::path::Path;

use crate::error::{DtError, Result};

/// Write a file, creating parent directories as needed.
///
/// # Arguments
/// * `path` - Path to the file to write
/// * `content` - Content to write (anything that implements AsRef<[u8]>)
pub fn write_file_with_dirs<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DtError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| DtError::io(path, e))
}

/// Copy `src` into `dir`, keeping its file name. Returns the destination.
pub fn copy_into_dir(src: &Path, dir: &Path) -> Result<std::path::PathBuf> {
    let name = src.file_name().ok_or_else(|| DtError::MissingInput {
        what: "file name",
        path: src.to_path_buf(),
    })?;
    let dst = dir.join(name);
    fs::create_dir_all(dir).map_err(|e| DtError::io(dir, e))?;
    fs::copy(src, &dst).map_err(|e| DtError::io(src, e))?;
    Ok(dst)
}

/// Remove `dir` if it exists, then create it empty.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        fs::remove_dir_all(dir).map_err(|e| DtError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| DtError::io(dir, e))
}
