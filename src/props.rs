//! Android build property files (`build.prop`).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{DtError, Result};

/// A parsed set of build properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProp {
    props: BTreeMap<String, String>,
}

impl BuildProp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse property text. Within one file the last assignment of a key wins.
    ///
    /// Malformed lines are logged and skipped.
    pub fn parse(text: &str) -> Self {
        let mut props = BTreeMap::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("import ") {
                continue;
            }

            match parse_line(line, index + 1) {
                Ok((key, value)) => {
                    props.insert(key.to_string(), value.to_string());
                }
                Err(err) => warn!("{err}"),
            }
        }

        Self { props }
    }

    /// Read and parse a property file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| DtError::io(path, e))?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// First value found among `keys`, in order.
    pub fn get_first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.props.insert(key.to_string(), value.to_string());
    }

    /// Merge `other` into `self`. Keys already present are never overwritten.
    pub fn import_props(&mut self, other: &BuildProp) {
        for (key, value) in &other.props {
            self.props
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

fn parse_line(line: &str, number: usize) -> Result<(&str, &str)> {
    let malformed = || DtError::MalformedEntry {
        kind: "build property",
        line: number,
        content: line.to_string(),
    };

    let (key, value) = line.split_once('=').ok_or_else(malformed)?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(malformed());
    }
    Ok((key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_malformed() {
        let props = BuildProp::parse(
            "# begin build properties\n\
             ro.product.device=lisa\n\
             import /vendor/etc/extra.prop\n\
             this line is broken\n\
             =novalue\n\
             ro.build.type = user\n\
             ro.product.device=renoir\n",
        );

        assert_eq!(props.len(), 2);
        assert_eq!(props.get("ro.product.device"), Some("renoir"));
        assert_eq!(props.get("ro.build.type"), Some("user"));
    }

    #[test]
    fn test_import_is_first_writer_wins() {
        let mut merged = BuildProp::parse("ro.product.model=System\nro.a=1\n");
        merged.import_props(&BuildProp::parse("ro.product.model=Vendor\nro.b=2\n"));

        assert_eq!(merged.get("ro.product.model"), Some("System"));
        assert_eq!(merged.get("ro.b"), Some("2"));
        assert_eq!(merged.get_first(&["ro.missing", "ro.a"]), Some("1"));
    }
}
