//! Android filesystem table (`fstab.<hardware>`).
//!
//! Line format:
//! `<device> <mount point> <type> <mount flags> [<fs_mgr flags>]`

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{DtError, Result};

/// One mount entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FstabEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub mount_flags: Vec<String>,
    pub fs_mgr_flags: Vec<String>,
    /// The partition has A/B slots (`slotselect`).
    pub slotselect: bool,
}

impl FstabEntry {
    /// Parse one non-comment line.
    pub fn parse(line: &str, number: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(DtError::MalformedEntry {
                kind: "fstab",
                line: number,
                content: line.to_string(),
            });
        }

        let split_flags = |flags: &str| -> Vec<String> {
            flags
                .split(',')
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect()
        };

        let mount_flags = split_flags(fields[3]);
        let fs_mgr_flags = fields.get(4).map(|&f| split_flags(f)).unwrap_or_default();
        let slotselect = fs_mgr_flags.iter().any(|f| f == "slotselect");

        Ok(Self {
            device: fields[0].to_string(),
            mount_point: fields[1].to_string(),
            fs_type: fields[2].to_string(),
            mount_flags,
            fs_mgr_flags,
            slotselect,
        })
    }

    /// The partition lives in a dynamic (super) partition.
    pub fn is_logical(&self) -> bool {
        self.fs_mgr_flags.iter().any(|f| f == "logical")
    }
}

/// Entries of one fstab file. Empty when the device ships none.
#[derive(Debug, Clone, Default)]
pub struct Fstab {
    path: Option<PathBuf>,
    entries: Vec<FstabEntry>,
}

impl Fstab {
    /// An fstab with no entries; every lookup answers "not found".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse fstab text, skipping malformed lines with a warning.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match FstabEntry::parse(line, index + 1) {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("{err}"),
            }
        }

        Self {
            path: None,
            entries,
        }
    }

    /// Load the fstab at `path`, or an empty one when there is none.
    ///
    /// An unreadable file degrades to an empty fstab as well.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("no fstab found, assuming no mount entries");
            return Self::empty();
        };

        match fs::read_to_string(path) {
            Ok(text) => Self {
                path: Some(path.to_path_buf()),
                ..Self::parse(&text)
            },
            Err(err) => {
                warn!(path = %path.display(), "cannot read fstab: {err}");
                Self::empty()
            }
        }
    }

    /// Path of the file the entries came from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn entries(&self) -> &[FstabEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry mounted at `mount_point`.
    pub fn entry_for(&self, mount_point: &str) -> Option<&FstabEntry> {
        self.entries.iter().find(|e| e.mount_point == mount_point)
    }

    /// Entries carrying the `slotselect` flag.
    pub fn slotselect_entries(&self) -> impl Iterator<Item = &FstabEntry> {
        self.entries.iter().filter(|e| e.slotselect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FSTAB: &str = "\
# Android fstab file.
system   /system   ext4  ro,barrier=1  wait,avb=vbmeta_system,logical,first_stage_mount,slotselect
vendor   /vendor   ext4  ro,barrier=1  wait,avb,logical,first_stage_mount,slotselect
/dev/block/by-name/metadata /metadata ext4 noatime,nosuid wait,check,formattable,first_stage_mount
/dev/block/bootdevice/by-name/userdata /data
/dev/block/by-name/persist /mnt/vendor/persist ext4 noatime
";

    #[test]
    fn test_parse_entries_and_flags() {
        let fstab = Fstab::parse(FSTAB);
        assert_eq!(fstab.entries().len(), 4);

        let vendor = fstab.entry_for("/vendor").unwrap();
        assert_eq!(vendor.device, "vendor");
        assert_eq!(vendor.fs_type, "ext4");
        assert_eq!(vendor.mount_flags, ["ro", "barrier=1"]);
        assert!(vendor.slotselect);
        assert!(vendor.is_logical());

        let persist = fstab.entry_for("/mnt/vendor/persist").unwrap();
        assert!(persist.fs_mgr_flags.is_empty());
        assert!(!persist.slotselect);

        let slotted: Vec<&str> = fstab
            .slotselect_entries()
            .map(|e| e.mount_point.as_str())
            .collect();
        assert_eq!(slotted, ["/system", "/vendor"]);
    }

    #[test]
    fn test_missing_fstab_is_empty() {
        let fstab = Fstab::load(None);
        assert!(fstab.is_empty());
        assert!(fstab.entry_for("/vendor").is_none());
        assert_eq!(fstab.slotselect_entries().count(), 0);
    }

    #[test]
    fn test_unreadable_fstab_is_empty() {
        let fstab = Fstab::load(Some(Path::new("/nonexistent/fstab.qcom")));
        assert!(fstab.is_empty());
        assert!(fstab.path().is_none());
    }
}
