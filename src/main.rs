//! dtgen - Android device tree generator.
//!
//! Reads a dumpyara-style firmware dump and generates:
//! - proprietary-files.txt (vendor blobs grouped by section)
//! - per-partition build property dumps
//! - rootdir init scripts, fstab and VINTF manifest
//! - device-info.json for template rendering

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dtgen::config::Config;

#[derive(Parser)]
#[command(name = "dtgen")]
#[command(about = "Android device tree generator")]
#[command(
    after_help = "QUICK START:\n  dtgen index <DUMP>       Rebuild the dump's all_files.txt\n  dtgen generate <DUMP>    Write the device tree\n  dtgen show blobs <DUMP>  Print proprietary-files.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a device tree from a dump
    Generate {
        /// Dump directory (contains all_files.txt)
        dump: PathBuf,
        /// Output directory (default: output/<codename>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also print the classified blob list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Regenerate the file list of a dump
    Index {
        /// Dump directory
        dump: PathBuf,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
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

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let base_dir = std::env::current_dir()?;
    let config = Config::load(&base_dir);
    dtgen::logging::init(&config.log_level);

    match cli.command {
        Commands::Generate { dump, output, json } => {
            commands::cmd_generate(&dump, output, json, &config)?;
        }

        Commands::Index { dump } => {
            commands::cmd_index(&dump, &config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Sections => commands::show::ShowTarget::Sections,
                ShowTarget::Partitions { dump } => commands::show::ShowTarget::Partitions { dump },
                ShowTarget::Fstab { dump } => commands::show::ShowTarget::Fstab { dump },
                ShowTarget::Blobs { dump } => commands::show::ShowTarget::Blobs { dump },
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
