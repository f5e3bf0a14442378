//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `generate` - Generate a device tree from a dump
//! - `index` - Rebuild a dump's file list
//! - `show` - Display information

pub mod generate;
mod index;
pub mod show;

pub use generate::cmd_generate;
pub use index::cmd_index;
pub use show::cmd_show;
