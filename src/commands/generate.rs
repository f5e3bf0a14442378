//! Generate command - writes a device tree for a dump.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use dtgen::config::Config;
use dtgen::devicetree::DeviceTree;

/// Execute the generate command.
pub fn cmd_generate(dump: &Path, output: Option<PathBuf>, json: bool, config: &Config) -> Result<()> {
    let tree = DeviceTree::new(dump, &config.manifest_name)
        .with_context(|| format!("Failed to read dump at {}", dump.display()))?;

    let folder = output.unwrap_or_else(|| config.device_output_dir(&tree.device_info().codename));
    tree.dump_to_folder(&folder)
        .with_context(|| format!("Failed to write device tree to {}", folder.display()))?;

    if json {
        let list = serde_json::to_string_pretty(tree.proprietary_files_list())
            .context("Failed to serialize proprietary files list")?;
        println!("{list}");
        return Ok(());
    }

    let info = tree.device_info();
    println!("=== Device tree for {} ===\n", info.codename);
    println!("  Build:       {}", info.build_description);
    println!(
        "  Partitions:  {}",
        tree.partitions().names().collect::<Vec<_>>().join(", ")
    );
    if !tree.ab_partitions().is_empty() {
        let ab: Vec<&str> = tree.ab_partitions().iter().map(|kind| kind.name()).collect();
        println!("  A/B:         {}", ab.join(", "));
    }
    println!("  Blobs:       {}", tree.proprietary_files_list().len());
    println!("\nWritten to {}", folder.display());
    Ok(())
}
