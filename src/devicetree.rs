//! Device tree generation from a dump.
//!
//! Runs the whole pipeline once: load the file manifest, discover partitions,
//! merge properties, resolve the fstab, classify blobs. Everything is read up
//! front; [`DeviceTree::dump_to_folder`] only writes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::blobs::BlobFilter;
use crate::common::{copy_into_dir, recreate_dir, write_file_with_dirs};
use crate::device_info::DeviceInfo;
use crate::dump::{Dump, DumpedFile};
use crate::error::{DtError, Result};
use crate::fstab::{Fstab, FstabEntry};
use crate::partition::{Partition, PartitionKind, Partitions};
use crate::props::BuildProp;
use crate::proprietary_files::{ProprietaryFilesList, UNCATEGORIZED};
use crate::sections::SectionRegistry;

/// Property prefixes left out of the `<partition>.prop` dumps; the build
/// system regenerates them.
pub const IGNORED_PROPS: &[&str] = &[
    "ro.bootimage.",
    "ro.build.",
    "ro.odm.build.",
    "ro.product.",
    "ro.system.",
    "ro.system_ext.",
    "ro.vendor.build.",
    "ro.vendor_dlkm.build.",
    "ro.odm_dlkm.build.",
    "ro.system_dlkm.build.",
];

/// The first `fstab.*` file under the vendor partition's `etc/`.
pub fn find_fstab(vendor: &Partition) -> Option<&DumpedFile> {
    vendor
        .files_in("etc")
        .find(|file| file.file_name().starts_with("fstab.") && file.path().is_file())
}

/// Partitions with A/B slots, in fstab order.
///
/// Empty unless the device declares A/B updates; fstab entries that do not
/// map to a known partition are skipped.
pub fn ab_partitions(fstab: &Fstab, device_is_ab: bool) -> Vec<PartitionKind> {
    if !device_is_ab {
        return Vec::new();
    }

    let mut kinds = Vec::new();
    for entry in fstab.slotselect_entries() {
        if let Some(kind) = PartitionKind::from_mount_point(&entry.mount_point) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }
    kinds
}

/// Render build properties grouped by the section that claims them.
///
/// Keys matching [`IGNORED_PROPS`] are dropped. Unclaimed keys go last under
/// the uncategorized header.
pub fn readable_props(props: &BuildProp, registry: &SectionRegistry) -> String {
    let mut groups: Vec<Vec<(&str, &str)>> = vec![Vec::new(); registry.len() + 1];

    for (key, value) in props.iter() {
        if IGNORED_PROPS.iter().any(|prefix| key.starts_with(prefix)) {
            continue;
        }
        let index = registry
            .section_index_for_property(key)
            .unwrap_or(registry.len());
        groups[index].push((key, value));
    }

    let names = registry
        .sections()
        .iter()
        .map(|s| s.name())
        .chain(std::iter::once(UNCATEGORIZED));

    let mut blocks = Vec::new();
    for (name, group) in names.zip(&groups) {
        if group.is_empty() {
            continue;
        }
        let mut block = format!("# {name}\n");
        for (key, value) in group {
            block.push_str(&format!("{key}={value}\n"));
        }
        blocks.push(block);
    }
    blocks.join("\n")
}

/// Per-partition part of [`DeviceSummary`].
#[derive(Debug, Serialize)]
pub struct PartitionSummary<'a> {
    pub name: &'static str,
    pub root: String,
    pub files: usize,
    pub fstab_entry: Option<&'a FstabEntry>,
}

/// Machine-readable description of the device for template renderers.
#[derive(Debug, Serialize)]
pub struct DeviceSummary<'a> {
    pub device: &'a DeviceInfo,
    pub ab_partitions: &'a [PartitionKind],
    pub fstab: Option<String>,
    pub partitions: Vec<PartitionSummary<'a>>,
}

/// An Android device tree derived from one dump.
pub struct DeviceTree {
    path: PathBuf,
    dump: Dump,
    partitions: Partitions,
    build_prop: BuildProp,
    device_info: DeviceInfo,
    fstab: Fstab,
    ab_partitions: Vec<PartitionKind>,
    registry: SectionRegistry,
    proprietary_files_list: ProprietaryFilesList,
    rootdir_bin_files: Vec<DumpedFile>,
    rootdir_etc_files: Vec<DumpedFile>,
}

impl DeviceTree {
    /// Generate a device tree with the stock ignore tables and sections.
    pub fn new(path: &Path, manifest_name: &str) -> Result<Self> {
        let filter = BlobFilter::aosp()?;
        let registry = SectionRegistry::builtin()?;
        Self::with_rules(path, manifest_name, &filter, registry)
    }

    /// Generate a device tree with explicit rules.
    pub fn with_rules(
        path: &Path,
        manifest_name: &str,
        filter: &BlobFilter,
        registry: SectionRegistry,
    ) -> Result<Self> {
        let dump = Dump::open(path, manifest_name)?;

        let mut partitions = Partitions::discover(path);
        partitions.fill_files(dump.files());

        let build_prop = partitions.merged_build_prop();
        let device_info = DeviceInfo::new(&build_prop);

        let fstab_path = partitions
            .get(PartitionKind::Vendor)
            .and_then(find_fstab)
            .map(|file| file.path().to_path_buf());
        let fstab = Fstab::load(fstab_path.as_deref());
        partitions.fill_fstab_entries(&fstab);

        let ab_partitions = ab_partitions(&fstab, device_info.device_is_ab);

        let (rootdir_bin_files, rootdir_etc_files) = match partitions.get(PartitionKind::Vendor) {
            Some(vendor) => (
                vendor
                    .files_in("bin")
                    .filter(|file| file.file_name().ends_with(".sh"))
                    .cloned()
                    .collect(),
                vendor.files_in("etc/init/hw").cloned().collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let proprietary_files_list = ProprietaryFilesList::new(&partitions, filter, &registry);

        info!(
            codename = %device_info.codename,
            partitions = partitions.all().len(),
            blobs = proprietary_files_list.len(),
            "device tree generated"
        );

        Ok(Self {
            path: path.to_path_buf(),
            dump,
            partitions,
            build_prop,
            device_info,
            fstab,
            ab_partitions,
            registry,
            proprietary_files_list,
            rootdir_bin_files,
            rootdir_etc_files,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dump(&self) -> &Dump {
        &self.dump
    }

    pub fn partitions(&self) -> &Partitions {
        &self.partitions
    }

    /// Properties of all partitions, first writer wins.
    pub fn build_prop(&self) -> &BuildProp {
        &self.build_prop
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn fstab(&self) -> &Fstab {
        &self.fstab
    }

    pub fn ab_partitions(&self) -> &[PartitionKind] {
        &self.ab_partitions
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn proprietary_files_list(&self) -> &ProprietaryFilesList {
        &self.proprietary_files_list
    }

    pub fn rootdir_bin_files(&self) -> &[DumpedFile] {
        &self.rootdir_bin_files
    }

    pub fn rootdir_etc_files(&self) -> &[DumpedFile] {
        &self.rootdir_etc_files
    }

    /// `proprietary-files.txt` content.
    pub fn proprietary_files_txt(&self) -> String {
        self.proprietary_files_list
            .get_formatted_list(&self.device_info.build_description)
    }

    pub fn summary(&self) -> DeviceSummary<'_> {
        DeviceSummary {
            device: &self.device_info,
            ab_partitions: &self.ab_partitions,
            fstab: self
                .fstab
                .path()
                .and_then(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned()),
            partitions: self
                .partitions
                .all()
                .iter()
                .map(|partition| PartitionSummary {
                    name: partition.name(),
                    root: partition
                        .real_path()
                        .strip_prefix(&self.path)
                        .unwrap_or(partition.real_path())
                        .display()
                        .to_string(),
                    files: partition.files().len(),
                    fstab_entry: partition.fstab_entry(),
                })
                .collect(),
        }
    }

    /// Write the generated files to `folder`, replacing whatever was there.
    pub fn dump_to_folder(&self, folder: &Path) -> Result<()> {
        recreate_dir(folder)?;

        write_file_with_dirs(folder.join("proprietary-files.txt"), self.proprietary_files_txt())?;

        for partition in self.partitions.all() {
            let Some(props) = partition.build_prop().filter(|p| !p.is_empty()) else {
                continue;
            };
            write_file_with_dirs(
                folder.join(format!("{}.prop", partition.name())),
                readable_props(props, &self.registry),
            )?;
        }

        let rootdir_bin = folder.join("rootdir/bin");
        for file in &self.rootdir_bin_files {
            copy_into_dir(file.path(), &rootdir_bin)?;
        }

        let rootdir_etc = folder.join("rootdir/etc");
        for file in &self.rootdir_etc_files {
            copy_into_dir(file.path(), &rootdir_etc)?;
        }
        if let Some(fstab) = self.fstab.path() {
            copy_into_dir(fstab, &rootdir_etc)?;
        }

        if let Some(vendor) = self.partitions.get(PartitionKind::Vendor) {
            let manifest = vendor.real_path().join("etc/vintf/manifest.xml");
            if manifest.is_file() {
                std::fs::copy(&manifest, folder.join("manifest.xml"))
                    .map_err(|e| DtError::io(&manifest, e))?;
            }
        }

        let summary = serde_json::to_string_pretty(&self.summary())
            .map_err(|e| DtError::io(folder.join("device-info.json"), e.into()))?;
        write_file_with_dirs(folder.join("device-info.json"), summary + "\n")?;

        info!(folder = %folder.display(), "device tree written");
        Ok(())
    }
}
