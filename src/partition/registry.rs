//! Partition discovery and file assignment.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Partition, PartitionKind};
use crate::dump::DumpedFile;
use crate::fstab::Fstab;
use crate::props::BuildProp;

/// All partitions found in a dump, in [`PartitionKind::ALL`] order.
#[derive(Debug, Clone)]
pub struct Partitions {
    partitions: Vec<Partition>,
    unowned: Vec<DumpedFile>,
}

/// A real directory, not a symlink to one.
fn is_real_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|meta| meta.file_type().is_dir())
        .unwrap_or(false)
}

/// Locate the system root: `system/system` on system-as-root dumps, else `system`.
fn find_system_root(dump_root: &Path) -> Option<PathBuf> {
    let sar = dump_root.join("system/system");
    if is_real_dir(&sar) && sar.join("build.prop").is_file() {
        return Some(sar);
    }

    let system = dump_root.join("system");
    is_real_dir(&system).then_some(system)
}

impl Partitions {
    /// Discover the partitions present under `dump_root`.
    ///
    /// A kind without a root on disk is simply absent.
    pub fn discover(dump_root: &Path) -> Self {
        let system_root = find_system_root(dump_root);
        let mut partitions = Vec::new();

        for kind in PartitionKind::ALL {
            let root = if kind == PartitionKind::System {
                system_root.clone()
            } else {
                let mut candidates = vec![dump_root.join(kind.name())];
                if let Some(system_root) = &system_root {
                    candidates.push(system_root.join(kind.name()));
                }
                candidates.into_iter().find(|path| is_real_dir(path))
            };

            if let Some(root) = root {
                debug!(partition = %kind, root = %root.display(), "found partition");
                partitions.push(Partition::new(kind, root));
            }
        }

        Self {
            partitions,
            unowned: Vec::new(),
        }
    }

    /// Build a registry from already constructed partitions.
    pub fn from_partitions(mut partitions: Vec<Partition>) -> Self {
        partitions.sort_by_key(|p| p.kind());
        partitions.dedup_by_key(|p| p.kind());
        Self {
            partitions,
            unowned: Vec::new(),
        }
    }

    /// Assign every file to the partition with the longest matching root.
    ///
    /// Files under no known root are kept aside as unowned.
    pub fn fill_files(&mut self, files: &[DumpedFile]) {
        for file in files {
            match self.owner_index(file) {
                Some(index) => self.partitions[index].push_file(file.clone()),
                None => {
                    debug!(file = file.relative(), "file belongs to no partition");
                    self.unowned.push(file.clone());
                }
            }
        }

        info!(
            partitions = self.partitions.len(),
            unowned = self.unowned.len(),
            "assigned dump files to partitions"
        );
    }

    /// Attach fstab entries to every partition.
    pub fn fill_fstab_entries(&mut self, fstab: &Fstab) {
        for partition in &mut self.partitions {
            partition.fill_fstab_entry(fstab);
        }
    }

    fn owner_index(&self, file: &DumpedFile) -> Option<usize> {
        self.partitions
            .iter()
            .enumerate()
            .filter(|(_, p)| file.path().starts_with(p.real_path()))
            .max_by_key(|(_, p)| p.real_path().components().count())
            .map(|(index, _)| index)
    }

    /// The partition that owns `file`, if any.
    pub fn partition_of(&self, file: &DumpedFile) -> Option<&Partition> {
        self.owner_index(file).map(|index| &self.partitions[index])
    }

    pub fn get(&self, kind: PartitionKind) -> Option<&Partition> {
        self.partitions.iter().find(|p| p.kind() == kind)
    }

    pub fn all(&self) -> &[Partition] {
        &self.partitions
    }

    /// Partitions owning at least one file.
    pub fn with_files(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter().filter(|p| !p.files().is_empty())
    }

    /// Files no partition claimed.
    pub fn unowned(&self) -> &[DumpedFile] {
        &self.unowned
    }

    /// Mount names of all partitions, for recognising mount-point markers.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.partitions.iter().map(|p| p.name())
    }

    /// Merge the build properties of every partition.
    ///
    /// Partitions are visited in load order and the first one to set a key
    /// keeps it.
    pub fn merged_build_prop(&self) -> BuildProp {
        let mut merged = BuildProp::new();
        for props in self.partitions.iter().filter_map(|p| p.build_prop()) {
            merged.import_props(props);
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_system_as_root_and_nested_vendor() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "system/system/build.prop", "ro.a=system\n");
        touch(root, "system/system/vendor/build.prop", "ro.a=vendor\nro.b=vendor\n");
        touch(root, "product/etc/build.prop", "ro.b=product\nro.c=product\n");

        let partitions = Partitions::discover(root);
        let kinds: Vec<PartitionKind> = partitions.all().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            [PartitionKind::System, PartitionKind::Vendor, PartitionKind::Product]
        );
        assert_eq!(
            partitions.get(PartitionKind::Vendor).unwrap().real_path(),
            root.join("system/system/vendor")
        );

        let merged = partitions.merged_build_prop();
        assert_eq!(merged.get("ro.a"), Some("system"));
        assert_eq!(merged.get("ro.b"), Some("vendor"));
        assert_eq!(merged.get("ro.c"), Some("product"));
    }

    #[test]
    fn test_longest_prefix_owns_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "system/system/build.prop", "");
        touch(root, "system/system/vendor/lib/libv.so", "");
        touch(root, "system/system/lib/libs.so", "");
        touch(root, "boot/kernel", "");

        let files = [
            DumpedFile::new(root, "system/system/vendor/lib/libv.so"),
            DumpedFile::new(root, "system/system/lib/libs.so"),
            DumpedFile::new(root, "boot/kernel"),
        ];

        let mut partitions = Partitions::discover(root);
        partitions.fill_files(&files);

        let system = partitions.get(PartitionKind::System).unwrap();
        let vendor = partitions.get(PartitionKind::Vendor).unwrap();
        assert_eq!(system.files(), &files[1..2]);
        assert_eq!(vendor.files(), &files[0..1]);
        assert_eq!(partitions.unowned(), &files[2..]);
        assert_eq!(
            partitions.partition_of(&files[0]).map(|p| p.kind()),
            Some(PartitionKind::Vendor)
        );
        assert!(partitions.partition_of(&files[2]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_is_not_a_partition() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(root, "system/system/build.prop", "");
        fs::create_dir_all(root.join("real_vendor")).unwrap();
        std::os::unix::fs::symlink(root.join("real_vendor"), root.join("vendor")).unwrap();

        let partitions = Partitions::discover(root);
        assert!(partitions.get(PartitionKind::Vendor).is_none());
    }
}
