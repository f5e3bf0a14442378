//! Dumpyara dump loading.
//!
//! A dump is a directory of extracted partitions plus a manifest listing every
//! file in it, one dump-relative path per line (`all_files.txt`).

pub mod reorder;

pub use reorder::{reorder_key, ReorderKey};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{DtError, Result};

/// Default name of the file manifest inside a dump.
pub const DEFAULT_MANIFEST_NAME: &str = "all_files.txt";

/// One regular file of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DumpedFile {
    path: PathBuf,
    relative: String,
}

impl DumpedFile {
    /// Create a file entry from the dump root and a `/`-separated relative path.
    pub fn new(root: &Path, relative: &str) -> Self {
        Self {
            path: root.join(relative),
            relative: relative.to_string(),
        }
    }

    /// Absolute path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the dump root.
    pub fn relative(&self) -> &str {
        &self.relative
    }

    pub fn file_name(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or(&self.relative)
    }
}

/// The discovered file set of a dump, deduplicated and in reorder-key order.
#[derive(Debug, Clone)]
pub struct Dump {
    root: PathBuf,
    files: Vec<DumpedFile>,
}

impl Dump {
    /// Open a dump by reading its manifest.
    ///
    /// A missing manifest is fatal. Manifest entries that do not name an
    /// existing regular file are dropped.
    pub fn open(root: &Path, manifest_name: &str) -> Result<Self> {
        let manifest = root.join(manifest_name);
        if !manifest.is_file() {
            return Err(DtError::MissingInput {
                what: "file manifest",
                path: manifest,
            });
        }

        let text = fs::read_to_string(&manifest).map_err(|e| DtError::io(&manifest, e))?;
        Ok(Self::from_manifest(root, &text))
    }

    /// Build the file set from manifest text.
    pub fn from_manifest(root: &Path, manifest: &str) -> Self {
        let mut seen = HashSet::new();
        let mut relatives = Vec::new();
        let mut dropped = 0usize;

        for line in manifest.lines() {
            let entry = line.trim_end_matches('\r').trim_start_matches("./");
            let entry = entry.trim_start_matches('/');
            if entry.is_empty() || !seen.insert(entry) {
                continue;
            }
            if !root.join(entry).is_file() {
                debug!(entry, "manifest entry is not a regular file, dropping");
                dropped += 1;
                continue;
            }
            relatives.push(entry);
        }

        relatives.sort_by_key(|entry| reorder_key(entry));

        let files: Vec<DumpedFile> = relatives
            .into_iter()
            .map(|entry| DumpedFile::new(root, entry))
            .collect();

        info!(files = files.len(), dropped, "loaded dump manifest");

        Self {
            root: root.to_path_buf(),
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[DumpedFile] {
        &self.files
    }
}

/// Regenerate the manifest of a dump by walking its tree.
///
/// Regular files and symlinks are listed, the manifest itself is not.
/// Returns the number of entries written.
pub fn index_dump(root: &Path, manifest_name: &str) -> Result<usize> {
    if !root.is_dir() {
        return Err(DtError::MissingInput {
            what: "dump directory",
            path: root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            DtError::io(path, e.into())
        })?;

        let file_type = entry.file_type();
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if relative == manifest_name {
            continue;
        }
        entries.push(relative);
    }

    let manifest = root.join(manifest_name);
    let mut content = entries.join("\n");
    content.push('\n');
    fs::write(&manifest, content).map_err(|e| DtError::io(&manifest, e))?;

    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_manifest_dedup_and_filter() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "vendor/bin/foo");
        touch(root, "system/system/build.prop");
        fs::create_dir_all(root.join("vendor/etc")).unwrap();

        let manifest = "vendor/bin/foo\nvendor/etc\nmissing/file\nvendor/bin/foo\n\nsystem/system/build.prop\n";
        let dump = Dump::from_manifest(root, manifest);

        let relatives: Vec<&str> = dump.files().iter().map(|f| f.relative()).collect();
        assert_eq!(relatives, ["system/system/build.prop", "vendor/bin/foo"]);
        assert_eq!(dump.files()[1].path(), root.join("vendor/bin/foo"));
        assert_eq!(dump.files()[1].file_name(), "foo");
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = Dump::open(temp.path(), DEFAULT_MANIFEST_NAME).unwrap_err();
        assert!(matches!(err, DtError::MissingInput { .. }));
    }

    #[test]
    fn test_index_then_open() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "vendor/lib64/libfoo.so");
        touch(root, "vendor/etc/fstab.qcom");

        let count = index_dump(root, DEFAULT_MANIFEST_NAME).unwrap();
        assert_eq!(count, 2);

        let dump = Dump::open(root, DEFAULT_MANIFEST_NAME).unwrap();
        let relatives: Vec<&str> = dump.files().iter().map(|f| f.relative()).collect();
        assert_eq!(relatives, ["vendor/etc/fstab.qcom", "vendor/lib64/libfoo.so"]);
    }
}
