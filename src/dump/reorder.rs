//! Deterministic ordering for dump paths.
//!
//! Plain lexical order interleaves partitions (`odm/`, `product/`, `system/`,
//! `vendor/`) and scatters a directory's files between its subdirectories.
//! The key below groups by partition in Android load order first, then by
//! directory, with a directory's own files ahead of its subdirectories.

use crate::partition::PartitionKind;

/// Sort key for a dump-relative (or partition-prefixed) path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReorderKey {
    rank: usize,
    top: String,
    dirs: Vec<String>,
    name: String,
    path: String,
}

/// Rank of a top-level component: known partitions in load order, then the rest.
fn top_rank(component: &str) -> usize {
    PartitionKind::ALL
        .iter()
        .position(|kind| kind.name() == component)
        .unwrap_or(PartitionKind::ALL.len())
}

/// Compute the ordering key of a `/`-separated path.
pub fn reorder_key(path: &str) -> ReorderKey {
    let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();

    let (top, dirs, name) = match components.as_slice() {
        [] => ("", &[][..], ""),
        [name] => ("", &[][..], *name),
        [top, middle @ .., name] => (*top, middle, *name),
    };

    ReorderKey {
        rank: if top.is_empty() {
            PartitionKind::ALL.len()
        } else {
            top_rank(top)
        },
        top: top.to_string(),
        dirs: dirs.iter().map(|d| d.to_string()).collect(),
        name: name.to_string(),
        path: path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(paths: &[&str]) -> Vec<String> {
        let mut paths: Vec<String> = paths.iter().map(|p| p.to_string()).collect();
        paths.sort_by_key(|p| reorder_key(p));
        paths
    }

    #[test]
    fn test_partitions_follow_load_order() {
        let result = sorted(&["vendor/a", "product/a", "system/a", "odm/a"]);
        assert_eq!(result, ["system/a", "vendor/a", "odm/a", "product/a"]);
    }

    #[test]
    fn test_directory_files_before_subdirectories() {
        let result = sorted(&[
            "vendor/lib/hw/audio.primary.default.so",
            "vendor/lib/libz_vendor.so",
            "vendor/lib/liba.so",
        ]);
        assert_eq!(
            result,
            [
                "vendor/lib/liba.so",
                "vendor/lib/libz_vendor.so",
                "vendor/lib/hw/audio.primary.default.so",
            ]
        );
    }

    #[test]
    fn test_unknown_top_level_after_partitions() {
        let result = sorted(&["boot/kernel", "vendor/a", "all_files.txt"]);
        assert_eq!(result, ["vendor/a", "all_files.txt", "boot/kernel"]);
    }
}
