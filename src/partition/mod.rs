//! Partition model.
//!
//! A partition owns the dumped files rooted under it, its build properties and
//! its fstab entry. Files are handed out by [`Partitions`], never gathered by
//! the partition itself.

pub mod registry;

pub use registry::Partitions;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::dump::DumpedFile;
use crate::fstab::{Fstab, FstabEntry};
use crate::props::BuildProp;

/// Where a partition may keep its `build.prop`, relative to its root.
const BUILD_PROP_LOCATIONS: &[&str] = &["build.prop", "etc/build.prop"];

/// The closed set of partitions dtgen knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionKind {
    System,
    SystemExt,
    SystemDlkm,
    Vendor,
    VendorDlkm,
    OdmDlkm,
    Odm,
    Product,
}

impl PartitionKind {
    /// All kinds, in Android init property load order.
    pub const ALL: [PartitionKind; 8] = [
        PartitionKind::System,
        PartitionKind::SystemExt,
        PartitionKind::SystemDlkm,
        PartitionKind::Vendor,
        PartitionKind::VendorDlkm,
        PartitionKind::OdmDlkm,
        PartitionKind::Odm,
        PartitionKind::Product,
    ];

    /// Partition name, also its mount-point name.
    pub fn name(self) -> &'static str {
        match self {
            PartitionKind::System => "system",
            PartitionKind::SystemExt => "system_ext",
            PartitionKind::SystemDlkm => "system_dlkm",
            PartitionKind::Vendor => "vendor",
            PartitionKind::VendorDlkm => "vendor_dlkm",
            PartitionKind::OdmDlkm => "odm_dlkm",
            PartitionKind::Odm => "odm",
            PartitionKind::Product => "product",
        }
    }

    /// Mount point in the device's fstab.
    pub fn mount_point(self) -> String {
        format!("/{}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Map an fstab mount point to a partition. System-as-root mounts at `/`.
    pub fn from_mount_point(mount_point: &str) -> Option<Self> {
        match mount_point {
            "/" => Some(PartitionKind::System),
            _ => Self::from_name(mount_point.strip_prefix('/')?),
        }
    }
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One partition found in the dump.
#[derive(Debug, Clone)]
pub struct Partition {
    kind: PartitionKind,
    real_path: PathBuf,
    files: Vec<DumpedFile>,
    build_prop: Option<BuildProp>,
    fstab_entry: Option<FstabEntry>,
}

impl Partition {
    /// Create a partition rooted at `real_path` and read its build properties.
    pub fn new(kind: PartitionKind, real_path: PathBuf) -> Self {
        let build_prop = BUILD_PROP_LOCATIONS
            .iter()
            .map(|location| real_path.join(location))
            .find(|path| path.is_file())
            .and_then(|path| match BuildProp::from_file(&path) {
                Ok(props) => Some(props),
                Err(err) => {
                    warn!(partition = %kind, "{err}");
                    None
                }
            });

        Self {
            kind,
            real_path,
            files: Vec::new(),
            build_prop,
            fstab_entry: None,
        }
    }

    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    /// Mount-point name, used as prefix of proprietary file paths.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Root of the partition on disk.
    pub fn real_path(&self) -> &Path {
        &self.real_path
    }

    /// Files owned by this partition, in dump order.
    pub fn files(&self) -> &[DumpedFile] {
        &self.files
    }

    pub fn build_prop(&self) -> Option<&BuildProp> {
        self.build_prop.as_ref()
    }

    pub fn fstab_entry(&self) -> Option<&FstabEntry> {
        self.fstab_entry.as_ref()
    }

    /// `file` relative to the partition root, `/`-separated.
    pub fn relative_path(&self, file: &DumpedFile) -> Option<String> {
        let relative = file.path().strip_prefix(&self.real_path).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join("/"))
    }

    /// Owned files whose partition-relative path lies under `folder`.
    pub fn files_in<'a>(&'a self, folder: &'a str) -> impl Iterator<Item = &'a DumpedFile> + 'a {
        self.files.iter().filter(move |file| {
            self.relative_path(file)
                .is_some_and(|rel| rel.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/')))
        })
    }

    pub(crate) fn push_file(&mut self, file: DumpedFile) {
        self.files.push(file);
    }

    /// Attach the fstab entry mounted at this partition's mount point.
    pub(crate) fn fill_fstab_entry(&mut self, fstab: &Fstab) {
        let entry = match self.kind {
            PartitionKind::System => fstab
                .entry_for("/system")
                .or_else(|| fstab.entry_for("/")),
            kind => fstab.entry_for(&kind.mount_point()),
        };
        self.fstab_entry = entry.cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mount_point() {
        assert_eq!(PartitionKind::from_mount_point("/"), Some(PartitionKind::System));
        assert_eq!(
            PartitionKind::from_mount_point("/system_ext"),
            Some(PartitionKind::SystemExt)
        );
        assert_eq!(
            PartitionKind::from_mount_point("/vendor_dlkm"),
            Some(PartitionKind::VendorDlkm)
        );
        assert_eq!(PartitionKind::from_mount_point("/metadata"), None);
        assert_eq!(PartitionKind::from_mount_point("vendor"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for kind in PartitionKind::ALL {
            assert_eq!(PartitionKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_relative_path_and_files_in() {
        let root = Path::new("/dump");
        let mut vendor = Partition::new(PartitionKind::Vendor, root.join("vendor"));
        vendor.push_file(DumpedFile::new(root, "vendor/etc/init/hw/init.qcom.rc"));
        vendor.push_file(DumpedFile::new(root, "vendor/etc/fstab.qcom"));
        vendor.push_file(DumpedFile::new(root, "vendor/etc_extra/file"));

        assert_eq!(
            vendor.relative_path(&vendor.files()[1]).as_deref(),
            Some("etc/fstab.qcom")
        );

        let init: Vec<&str> = vendor
            .files_in("etc/init/hw")
            .map(|f| f.relative())
            .collect();
        assert_eq!(init, ["vendor/etc/init/hw/init.qcom.rc"]);
        assert_eq!(vendor.files_in("etc").count(), 2);
    }
}
