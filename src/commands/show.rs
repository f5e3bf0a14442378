//! Show command - displays information.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use dtgen::config::Config;
use dtgen::devicetree::DeviceTree;
use dtgen::sections::SectionRegistry;

/// Show target for the show command.
pub enum ShowTarget {
    /// Show configuration
    Config,
    /// Show built-in sections in priority order
    Sections,
    /// Show partitions found in a dump
    Partitions { dump: PathBuf },
    /// Show the fstab of a dump
    Fstab { dump: PathBuf },
    /// Show the proprietary files list of a dump
    Blobs { dump: PathBuf },
}

fn open_tree(dump: &Path, config: &Config) -> Result<DeviceTree> {
    DeviceTree::new(dump, &config.manifest_name)
        .with_context(|| format!("Failed to read dump at {}", dump.display()))
}

/// Execute the show command.
pub fn cmd_show(target: ShowTarget, config: &Config) -> Result<()> {
    match target {
        ShowTarget::Config => config.print(),
        ShowTarget::Sections => {
            let registry = SectionRegistry::builtin().context("Built-in sections are invalid")?;
            for (index, compiled) in registry.sections().iter().enumerate() {
                let section = compiled.section();
                println!(
                    "{:>2}. {:<20} interfaces={} modules={} binaries={} libraries={} folders={} patterns={}",
                    index + 1,
                    section.name,
                    section.interfaces.len(),
                    section.hardware_modules.len(),
                    section.binaries.len(),
                    section.libraries.len(),
                    section.folders.len(),
                    section.patterns.len(),
                );
            }
        }
        ShowTarget::Partitions { dump } => {
            let tree = open_tree(&dump, config)?;
            for partition in tree.partitions().all() {
                let slots = if tree.ab_partitions().contains(&partition.kind()) {
                    " [A/B]"
                } else {
                    ""
                };
                println!(
                    "{:<12} {:<40} {:>6} files{}",
                    partition.name(),
                    partition.real_path().display(),
                    partition.files().len(),
                    slots
                );
            }
            let unowned = tree.partitions().unowned().len();
            if unowned > 0 {
                println!("\n{unowned} files outside any partition");
            }
        }
        ShowTarget::Fstab { dump } => {
            let tree = open_tree(&dump, config)?;
            match tree.fstab().path() {
                Some(path) => println!("# {}", path.display()),
                None => println!("No fstab found in vendor/etc"),
            }
            for entry in tree.fstab().entries() {
                println!(
                    "{:<40} {:<24} {:<8} {}",
                    entry.device,
                    entry.mount_point,
                    entry.fs_type,
                    entry.fs_mgr_flags.join(",")
                );
            }
        }
        ShowTarget::Blobs { dump } => {
            let tree = open_tree(&dump, config)?;
            print!("{}", tree.proprietary_files_txt());
        }
    }
    Ok(())
}
