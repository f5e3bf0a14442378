//! Unit tests for dtgen.
//!
//! These tests exercise pure functions in isolation without requiring
//! a dump on disk.

use std::path::{Path, PathBuf};

use dtgen::blobs::{BlobFilter, Rejection};
use dtgen::dump::{reorder_key, Dump, DumpedFile};
use dtgen::fstab::Fstab;
use dtgen::partition::{Partition, PartitionKind, Partitions};
use dtgen::props::BuildProp;
use dtgen::sections::naming::{matches_hardware_module, matches_interface};
use dtgen::sections::{MatchReason, SectionRegistry};

// =============================================================================
// Naming conventions
// =============================================================================

#[test]
fn test_interface_artifacts() {
    let interface = "android.hardware.gnss";
    for name in [
        "android.hardware.gnss",
        "android.hardware.gnss@2.1.so",
        "android.hardware.gnss@2.1-service-qti",
        "android.hardware.gnss-aidl-service-qti",
        "android.hardware.gnss.service.rc",
        "android.hardware.gnss.xml",
    ] {
        assert!(matches_interface(name, interface), "{name}");
    }

    for name in [
        "android.hardware.gnss2.so",
        "android.hardware.gnss.visibility_control@1.0.so",
        "vendor.android.hardware.gnss.so",
    ] {
        assert!(!matches_interface(name, interface), "{name}");
    }
}

#[test]
fn test_hardware_module_variants() {
    assert!(matches_hardware_module("audio.primary.lahaina.so", "audio.primary"));
    assert!(matches_hardware_module("audio.primary.default.so", "audio.primary"));
    assert!(!matches_hardware_module("audio.primary.so", "audio.primary"));
    assert!(!matches_hardware_module("audio.primary.a@1.so", "audio.primary"));
    assert!(!matches_hardware_module("audio.primary_ext.lahaina.so", "audio.primary"));
}

// =============================================================================
// Built-in rules
// =============================================================================

#[test]
fn test_builtin_classification() {
    let registry = SectionRegistry::builtin().unwrap();
    let section_of = |path: &str| registry.classify(path).map(|hit| hit.section.name());

    assert_eq!(section_of("lib64/hw/audio.primary.lahaina.so"), Some("Audio"));
    assert_eq!(section_of("etc/mixer_paths_lahaina.xml"), Some("Audio configs"));
    assert_eq!(section_of("etc/wifi/WCNSS_qcom_cfg.ini"), Some("Wi-Fi configs"));
    assert_eq!(section_of("lib64/libcamxstatscore.so"), Some("Camera"));
    assert_eq!(section_of("etc/unrelated.txt"), None);

    let hit = registry.classify("bin/hw/android.hardware.audio.service").unwrap();
    assert_eq!(hit.reason, MatchReason::Interface("android.hardware.audio"));
}

#[test]
fn test_builtin_filter() {
    let filter = BlobFilter::aosp().unwrap();

    assert_eq!(filter.rejection("bin/toybox"), Some(Rejection::Binary));
    assert_eq!(filter.rejection("lib64/libc++.so"), Some(Rejection::SharedLibrary));
    assert_eq!(filter.rejection("framework/oat/arm64/x.odex"), Some(Rejection::Extension));
    assert_eq!(filter.rejection("etc/init/hw/init.qcom.rc"), Some(Rejection::Folder("etc/init/hw")));
    assert_eq!(filter.rejection("etc/vintf/manifest.xml"), Some(Rejection::Path));

    assert!(!filter.is_allowed("lib64/android.hardware.gnss@2.1.so"));
    assert!(filter.is_allowed("lib64/hw/android.hardware.gnss@2.1-impl-qti.so"));
    assert!(filter.is_allowed("lib64/libcamx.so"));
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_reorder_groups_partitions_and_directories() {
    let mut paths = vec![
        "product/etc/a.xml",
        "vendor/lib64/hw/b.so",
        "odm/lib64/c.so",
        "vendor/lib64/a.so",
        "system_ext/lib64/d.so",
    ];
    paths.sort_by_key(|p| reorder_key(p));

    assert_eq!(
        paths,
        [
            "system_ext/lib64/d.so",
            "vendor/lib64/a.so",
            "vendor/lib64/hw/b.so",
            "odm/lib64/c.so",
            "product/etc/a.xml",
        ]
    );
}

// =============================================================================
// Properties and fstab
// =============================================================================

#[test]
fn test_merged_properties_first_writer_wins() {
    let mut merged = BuildProp::new();
    merged.import_props(&BuildProp::parse("ro.product.device=generic\nro.a=1\n"));
    merged.import_props(&BuildProp::parse("ro.product.device=lisa\nro.b=2\n"));

    assert_eq!(merged.get("ro.product.device"), Some("generic"));
    assert_eq!(merged.get("ro.b"), Some("2"));
    assert_eq!(merged.len(), 3);
}

#[test]
fn test_fstab_skips_malformed_lines() {
    let fstab = Fstab::parse(
        "# comment\n\
         /dev/block/by-name/userdata /data f2fs noatime latemount,wait,check\n\
         broken line\n\
         system / ext4 ro wait,slotselect,logical\n",
    );

    assert_eq!(fstab.entries().len(), 2);
    assert_eq!(
        PartitionKind::from_mount_point(&fstab.slotselect_entries().next().unwrap().mount_point),
        Some(PartitionKind::System)
    );
    assert!(fstab.entry_for("/data").is_some_and(|e| !e.is_logical()));
}

// =============================================================================
// Partition assignment
// =============================================================================

#[test]
fn test_longest_root_owns_file() {
    let root = Path::new("/nonexistent-dump");
    let mut partitions = Partitions::from_partitions(vec![
        Partition::new(PartitionKind::Vendor, root.join("vendor")),
        Partition::new(PartitionKind::System, root.join("system")),
        Partition::new(PartitionKind::Odm, root.join("vendor/odm")),
    ]);

    let files: Vec<DumpedFile> = ["vendor/odm/lib/a.so", "vendor/lib/b.so", "system/c", "boot.img"]
        .into_iter()
        .map(|p| DumpedFile::new(root, p))
        .collect();
    partitions.fill_files(&files);

    let owner = |i: usize| partitions.partition_of(&files[i]).map(|p| p.kind());
    assert_eq!(owner(0), Some(PartitionKind::Odm));
    assert_eq!(owner(1), Some(PartitionKind::Vendor));
    assert_eq!(owner(2), Some(PartitionKind::System));
    assert_eq!(owner(3), None);
    assert_eq!(partitions.unowned().len(), 1);

    let odm = partitions.get(PartitionKind::Odm).unwrap();
    assert_eq!(odm.relative_path(&files[0]).as_deref(), Some("lib/a.so"));
}

#[test]
fn test_manifest_entries_must_exist() {
    let dump = Dump::from_manifest(&PathBuf::from("/nonexistent-dump"), "vendor/a.so\n");
    assert!(dump.files().is_empty());
}
