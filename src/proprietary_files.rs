//! `proprietary-files.txt` assembly.
//!
//! Walks every partition's files, drops what the blob filter vetoes, assigns
//! the rest to the first matching section and renders the grouped list.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::blobs::BlobFilter;
use crate::dump::{reorder_key, DumpedFile};
use crate::partition::{Partition, PartitionKind, Partitions};
use crate::sections::SectionRegistry;

/// Header of the bucket for blobs no section claims.
pub const UNCATEGORIZED: &str = "Miscellaneous";

/// Blobs of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionFiles {
    pub name: &'static str,
    pub files: Vec<String>,
}

/// Classified, deduplicated blob list of one dump.
#[derive(Debug, Clone, Serialize)]
pub struct ProprietaryFilesList {
    sections: Vec<SectionFiles>,
    uncategorized: Vec<String>,
}

/// Whether `file` is reached through a symlinked directory below `root`.
fn traverses_symlink(root: &Path, file: &Path) -> io::Result<bool> {
    file.symlink_metadata()?;

    for ancestor in file.ancestors().skip(1) {
        if ancestor == root || !ancestor.starts_with(root) {
            break;
        }
        if ancestor.symlink_metadata()?.file_type().is_symlink() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Split a partition-relative path into the listed path and the path the
/// rules see.
///
/// A path like `vendor/lib/a.so` inside the system root is a nested partition
/// and is listed under that partition's own name.
fn listed_path<'a>(partition: &Partition, relative: &'a str) -> (String, &'a str) {
    if let Some((first, rest)) = relative.split_once('/') {
        if PartitionKind::from_name(first).is_some_and(|kind| kind != partition.kind()) {
            return (relative.to_string(), rest);
        }
    }
    (format!("{}/{}", partition.name(), relative), relative)
}

impl ProprietaryFilesList {
    /// Classify every eligible file of every partition.
    pub fn new(partitions: &Partitions, filter: &BlobFilter, registry: &SectionRegistry) -> Self {
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); registry.len()];
        let mut uncategorized = Vec::new();
        let mut seen = HashSet::new();

        for partition in partitions.with_files() {
            for file in partition.files() {
                let Some((listed, rule_path)) = Self::candidate(partition, file, filter) else {
                    continue;
                };

                if !seen.insert(listed.clone()) {
                    debug!(file = %listed, "duplicate blob, keeping first occurrence");
                    continue;
                }

                match registry.classify(&rule_path) {
                    Some(hit) => {
                        debug!(file = %listed, section = hit.section.name(), reason = %hit.reason, "classified");
                        buckets[hit.index].push(listed);
                    }
                    None => uncategorized.push(listed),
                }
            }
        }

        for bucket in &mut buckets {
            bucket.sort_by_key(|path| reorder_key(path));
        }
        uncategorized.sort_by_key(|path| reorder_key(path));

        let sections: Vec<SectionFiles> = registry
            .sections()
            .iter()
            .zip(buckets)
            .map(|(section, files)| SectionFiles {
                name: section.name(),
                files,
            })
            .collect();

        let list = Self {
            sections,
            uncategorized,
        };
        info!(
            blobs = list.len(),
            uncategorized = list.uncategorized.len(),
            "assembled proprietary files list"
        );
        list
    }

    /// The listed path and rule path of `file`, or `None` when it is no blob.
    fn candidate(
        partition: &Partition,
        file: &DumpedFile,
        filter: &BlobFilter,
    ) -> Option<(String, String)> {
        let relative = partition.relative_path(file)?;

        match traverses_symlink(partition.real_path(), file.path()) {
            Ok(false) => {}
            Ok(true) => {
                debug!(file = file.relative(), "reached through a symlinked directory, skipping");
                return None;
            }
            Err(err) => {
                warn!(file = file.relative(), "cannot inspect file, excluding it: {err}");
                return None;
            }
        }

        let (listed, rule_path) = listed_path(partition, &relative);
        if let Some(rejection) = filter.rejection(rule_path) {
            debug!(file = %listed, %rejection, "not a blob");
            return None;
        }
        let rule_path = rule_path.to_string();
        Some((listed, rule_path))
    }

    /// Every section with its blobs, in registration order, empty ones included.
    pub fn sections(&self) -> &[SectionFiles] {
        &self.sections
    }

    /// Blobs of section `name`.
    pub fn files_of(&self, name: &str) -> Option<&[String]> {
        if name == UNCATEGORIZED {
            return Some(&self.uncategorized);
        }
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.files.as_slice())
    }

    pub fn uncategorized(&self) -> &[String] {
        &self.uncategorized
    }

    /// Total number of listed blobs.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.files.len()).sum::<usize>() + self.uncategorized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render `proprietary-files.txt`.
    pub fn get_formatted_list(&self, build_description: &str) -> String {
        let mut out = format!("# Unpinned blobs from {build_description}\n");

        let groups = self
            .sections
            .iter()
            .map(|s| (s.name, s.files.as_slice()))
            .chain(std::iter::once((UNCATEGORIZED, self.uncategorized.as_slice())));

        for (name, files) in groups {
            if files.is_empty() {
                continue;
            }
            out.push_str(&format!("\n# {name}\n"));
            for file in files {
                out.push_str(file);
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_listed_path_prefixes_mount_name() {
        let vendor = Partition::new(PartitionKind::Vendor, PathBuf::from("/dump/vendor"));
        assert_eq!(
            listed_path(&vendor, "lib64/libfoo.so"),
            ("vendor/lib64/libfoo.so".to_string(), "lib64/libfoo.so")
        );

        let system = Partition::new(PartitionKind::System, PathBuf::from("/dump/system/system"));
        assert_eq!(
            listed_path(&system, "vendor/lib/a.so"),
            ("vendor/lib/a.so".to_string(), "lib/a.so")
        );
        assert_eq!(
            listed_path(&system, "system/a.so"),
            ("system/system/a.so".to_string(), "system/a.so")
        );
    }

    #[test]
    fn test_render_skips_empty_buckets() {
        let list = ProprietaryFilesList {
            sections: vec![
                SectionFiles {
                    name: "Audio",
                    files: vec![],
                },
                SectionFiles {
                    name: "Camera",
                    files: vec!["vendor/lib64/libcamx.so".to_string()],
                },
            ],
            uncategorized: vec!["vendor/etc/a.txt".to_string()],
        };

        assert_eq!(
            list.get_formatted_list("lisa-user 12 SKQ1 V13 release-keys"),
            "# Unpinned blobs from lisa-user 12 SKQ1 V13 release-keys\n\
             \n# Camera\nvendor/lib64/libcamx.so\n\
             \n# Miscellaneous\nvendor/etc/a.txt\n"
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.files_of("Audio"), Some(&[][..]));
        assert_eq!(list.files_of(UNCATEGORIZED).map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_uninspectable_file_excluded() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("vendor/lib64")).unwrap();
        fs::write(root.join("vendor/lib64/libok.so"), b"").unwrap();

        let mut partitions = Partitions::from_partitions(vec![Partition::new(
            PartitionKind::Vendor,
            root.join("vendor"),
        )]);
        partitions.fill_files(&[
            DumpedFile::new(root, "vendor/lib64/libgone.so"),
            DumpedFile::new(root, "vendor/lib64/libok.so"),
        ]);

        let list = ProprietaryFilesList::new(
            &partitions,
            &BlobFilter::aosp().unwrap(),
            &SectionRegistry::new(),
        );

        assert_eq!(list.uncategorized(), ["vendor/lib64/libok.so".to_string()]);
        assert_eq!(list.len(), 1);
    }
}
