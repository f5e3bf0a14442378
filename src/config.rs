//! Configuration management for dtgen.
//!
//! Reads configuration from .env file and environment variables.
//! Environment variables take precedence over .env file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::dump::DEFAULT_MANIFEST_NAME;

/// Default output directory, relative to the base directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default log filter when neither `RUST_LOG` nor `DTGEN_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// dtgen configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where generated trees go (default: output)
    pub output_dir: PathBuf,
    /// File list name inside a dump (default: all_files.txt)
    pub manifest_name: String,
    /// Log filter directive (e.g., "info", "dtgen=debug")
    pub log_level: String,
}

/// Read a .env file. A missing file yields no variables; bad lines are skipped.
fn read_env_file(path: &Path) -> HashMap<String, String> {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return HashMap::new();
    };

    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(err) => {
            warn!(path = %path.display(), "skipping .env line: {err}");
            None
        }
    })
    .collect()
}

impl Config {
    /// Load configuration from `<base_dir>/.env` and the environment.
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = read_env_file(&base_dir.join(".env"));

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        Self::from_vars(base_dir, &env_vars)
    }

    fn from_vars(base_dir: &Path, vars: &HashMap<String, String>) -> Self {
        let output_dir = vars
            .get("DTGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .map(|path| if path.is_absolute() { path } else { base_dir.join(path) })
            .unwrap_or_else(|| base_dir.join(DEFAULT_OUTPUT_DIR));

        let manifest_name = vars
            .get("DTGEN_MANIFEST_NAME")
            .cloned()
            .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string());

        let log_level = vars
            .get("DTGEN_LOG")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            output_dir,
            manifest_name,
            log_level,
        }
    }

    /// Output folder for one device.
    pub fn device_output_dir(&self, codename: &str) -> PathBuf {
        self.output_dir.join(codename)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  DTGEN_OUTPUT_DIR: {}", self.output_dir.display());
        println!("  DTGEN_MANIFEST_NAME: {}", self.manifest_name);
        println!("  DTGEN_LOG: {}", self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_env_file_syntax() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(
            &path,
            "# comment\n\nexport DTGEN_OUTPUT_DIR=\"trees\"\nDTGEN_LOG='debug'\nDTGEN_MANIFEST_NAME=\"all \\\"files\\\".txt\"\n",
        )
        .unwrap();

        let vars = read_env_file(&path);
        assert_eq!(vars.get("DTGEN_OUTPUT_DIR").map(String::as_str), Some("trees"));
        assert_eq!(vars.get("DTGEN_LOG").map(String::as_str), Some("debug"));
        assert_eq!(
            vars.get("DTGEN_MANIFEST_NAME").map(String::as_str),
            Some("all \"files\".txt")
        );
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_missing_env_file() {
        let temp = TempDir::new().unwrap();
        assert!(read_env_file(&temp.path().join(".env")).is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Path::new("/base"), &HashMap::new());
        assert_eq!(config.output_dir, PathBuf::from("/base/output"));
        assert_eq!(config.manifest_name, "all_files.txt");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.device_output_dir("lisa"), PathBuf::from("/base/output/lisa"));
    }

    #[test]
    fn test_absolute_output_dir_kept() {
        let vars = HashMap::from([("DTGEN_OUTPUT_DIR".to_string(), "/srv/trees".to_string())]);
        let config = Config::from_vars(Path::new("/base"), &vars);
        assert_eq!(config.output_dir, PathBuf::from("/srv/trees"));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_env_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env"),
            "DTGEN_MANIFEST_NAME=files.txt\nDTGEN_LOG=warn\n",
        )
        .unwrap();

        std::env::set_var("DTGEN_LOG", "trace");
        let config = Config::load(temp.path());
        std::env::remove_var("DTGEN_LOG");

        assert_eq!(config.manifest_name, "files.txt");
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.output_dir, temp.path().join("output"));
    }
}
