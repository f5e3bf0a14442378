//! Shared test utilities for dtgen tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use dtgen::dump::DEFAULT_MANIFEST_NAME;

/// Test environment with a mock dump and an output directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Mock dump root
    pub dump: PathBuf,
    /// Device tree destination
    pub output: PathBuf,
    files: Vec<String>,
}

impl TestEnv {
    /// Create a new test environment with an empty dump.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dump = temp_dir.path().join("dump");
        let output = temp_dir.path().join("output");
        fs::create_dir_all(&dump).expect("Failed to create dump dir");

        Self {
            _temp_dir: temp_dir,
            dump,
            output,
            files: Vec::new(),
        }
    }

    /// Write a file into the dump and remember it for the manifest.
    pub fn add_file(&mut self, relative: &str, content: &str) -> PathBuf {
        let path = self.dump.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write dump file");
        self.files.push(relative.to_string());
        path
    }

    /// Write an empty blob.
    pub fn add_blob(&mut self, relative: &str) -> PathBuf {
        self.add_file(relative, "")
    }

    /// List an entry in the manifest without creating it.
    pub fn list(&mut self, relative: &str) {
        self.files.push(relative.to_string());
    }

    /// Write `all_files.txt` listing every added file, in insertion order.
    pub fn write_manifest(&self) {
        let mut content = self.files.join("\n");
        content.push('\n');
        fs::write(self.dump.join(DEFAULT_MANIFEST_NAME), content)
            .expect("Failed to write manifest");
    }
}

/// Build properties of a typical A/B vendor partition.
pub const VENDOR_BUILD_PROP: &str = "\
# begin common build properties
ro.product.vendor.device=lisa
ro.product.vendor.manufacturer=Xiaomi
ro.product.vendor.brand=Xiaomi
ro.product.vendor.model=2109119DG
ro.vendor.build.id=SKQ1.211006.001
ro.vendor.build.version.release=12
ro.vendor.build.version.incremental=V13.0.5.0.SKOMIXM
ro.vendor.build.type=user
ro.vendor.build.tags=release-keys
ro.build.ab_update=true
ro.vendor.audio.sdk.ssr=false
persist.vendor.camera.privapp.list=org.codeaurora.snapcam
";

/// Vendor fstab with slotted system, vendor and odm.
pub const VENDOR_FSTAB: &str = "\
# Android fstab file.
system /system ext4 ro,barrier=1 wait,slotselect,avb=vbmeta_system,logical,first_stage_mount
vendor /vendor ext4 ro,barrier=1 wait,slotselect,avb,logical,first_stage_mount
odm /odm ext4 ro,barrier=1 wait,slotselect,avb,logical,first_stage_mount
/dev/block/bootdevice/by-name/metadata /metadata ext4 noatime,nosuid,nodev wait,check,formattable,first_stage_mount
/dev/block/bootdevice/by-name/modem /vendor/firmware_mnt vfat ro,shortname=lower wait,slotselect
";

/// Populate `env` with a small but complete system-as-root dump.
pub fn create_mock_dump(env: &mut TestEnv) {
    env.add_file(
        "system/system/build.prop",
        "ro.build.description=lisa-user 12 SKQ1.211006.001 V13.0.5.0.SKOMIXM release-keys\n\
         ro.build.version.release=12\n\
         ro.product.system.device=generic\n",
    );
    env.add_blob("system/system/bin/sh");
    env.add_blob("system/system/lib64/libc.so");

    env.add_file("vendor/build.prop", VENDOR_BUILD_PROP);
    env.add_file("vendor/etc/fstab.qcom", VENDOR_FSTAB);
    env.add_file("vendor/etc/init/hw/init.qcom.rc", "on boot\n");
    env.add_file("vendor/bin/init.qcom.sh", "#!/vendor/bin/sh\n");
    env.add_file("vendor/etc/vintf/manifest.xml", "<manifest version=\"1.0\" type=\"device\"/>\n");
    env.add_blob("vendor/bin/hw/android.hardware.audio.service");
    env.add_blob("vendor/lib64/hw/audio.primary.lahaina.so");
    env.add_blob("vendor/lib64/libcamx.so");
    env.add_blob("vendor/lib64/android.hardware.audio@7.0.so");
    env.add_blob("vendor/etc/unrelated.txt");

    env.add_file("odm/etc/build.prop", "ro.product.odm.device=lisa\n");
    env.add_blob("odm/lib64/libodm_blob.so");

    env.write_manifest();
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert that a directory exists.
pub fn assert_dir_exists(path: &Path) {
    assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
}
