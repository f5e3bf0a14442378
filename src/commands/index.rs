//! Index command - regenerates the file list of a dump.

use anyhow::{Context, Result};
use std::path::Path;

use dtgen::config::Config;
use dtgen::dump::index_dump;

/// Execute the index command.
pub fn cmd_index(dump: &Path, config: &Config) -> Result<()> {
    let count = index_dump(dump, &config.manifest_name)
        .with_context(|| format!("Failed to index {}", dump.display()))?;
    println!(
        "Indexed {} files into {}",
        count,
        dump.join(&config.manifest_name).display()
    );
    Ok(())
}
