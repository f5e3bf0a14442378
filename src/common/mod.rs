//! Shared utilities across dtgen modules.

pub mod files;
pub mod pattern;

pub use files::{copy_into_dir, recreate_dir, write_file_with_dirs};
pub use pattern::full_match_regex;
