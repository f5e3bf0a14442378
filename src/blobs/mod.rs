//! Blob eligibility.
//!
//! A file is a candidate blob unless one of the ignore tables vetoes it. All
//! checks run against the partition-relative path (`lib64/libfoo.so`, not
//! `vendor/lib64/libfoo.so`). Any single match excludes the file.

pub mod ignore;

pub use ignore::AOSP_IGNORES;

use std::collections::HashSet;
use std::fmt;

use regex::Regex;

use crate::common::full_match_regex;
use crate::error::Result;

/// A full-match path pattern with an optional exception.
///
/// The path is rejected when it matches `pattern` and does not match
/// `except`.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub pattern: &'static str,
    pub except: Option<&'static str>,
}

impl PatternRule {
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            except: None,
        }
    }

    pub const fn except(self, except: &'static str) -> Self {
        Self {
            pattern: self.pattern,
            except: Some(except),
        }
    }
}

/// One set of ignore tables.
#[derive(Debug)]
pub struct IgnoreTables {
    /// Executable basenames, grouped by origin.
    pub binaries: &'static [&'static [&'static str]],
    /// Shared library basenames, with `.so`.
    pub shared_libs: &'static [&'static str],
    /// Basenames of any kind.
    pub filenames: &'static [&'static str],
    /// Extensions without the leading dot.
    pub extensions: &'static [&'static str],
    /// Folder prefixes.
    pub folders: &'static [&'static str],
    /// Exact paths.
    pub paths: &'static [&'static str],
    pub patterns: &'static [PatternRule],
}

/// Why a path was vetoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Binary,
    SharedLibrary,
    Filename,
    Extension,
    Folder(&'static str),
    Path,
    Pattern(&'static str),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Binary => f.write_str("AOSP binary"),
            Rejection::SharedLibrary => f.write_str("AOSP shared library"),
            Rejection::Filename => f.write_str("ignored filename"),
            Rejection::Extension => f.write_str("ignored extension"),
            Rejection::Folder(folder) => write!(f, "inside {folder}"),
            Rejection::Path => f.write_str("ignored path"),
            Rejection::Pattern(pattern) => write!(f, "matches {pattern}"),
        }
    }
}

struct CompiledRule {
    source: &'static str,
    pattern: Regex,
    except: Option<Regex>,
}

/// Pure blob eligibility predicate built from [`IgnoreTables`].
pub struct BlobFilter {
    binaries: HashSet<&'static str>,
    shared_libs: HashSet<&'static str>,
    filenames: HashSet<&'static str>,
    extensions: HashSet<&'static str>,
    folders: HashSet<&'static str>,
    paths: HashSet<&'static str>,
    patterns: Vec<CompiledRule>,
}

impl BlobFilter {
    /// Filter with the stock AOSP tables.
    pub fn aosp() -> Result<Self> {
        Self::from_tables(&AOSP_IGNORES)
    }

    pub fn from_tables(tables: &IgnoreTables) -> Result<Self> {
        let patterns = tables
            .patterns
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    source: rule.pattern,
                    pattern: full_match_regex(rule.pattern, "ignore patterns")?,
                    except: rule
                        .except
                        .map(|except| full_match_regex(except, "ignore patterns"))
                        .transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            binaries: tables.binaries.iter().flat_map(|group| group.iter().copied()).collect(),
            shared_libs: tables.shared_libs.iter().copied().collect(),
            filenames: tables.filenames.iter().copied().collect(),
            extensions: tables.extensions.iter().copied().collect(),
            folders: tables.folders.iter().copied().collect(),
            paths: tables.paths.iter().copied().collect(),
            patterns,
        })
    }

    /// Whether `path` (partition-relative) may be listed as a blob.
    pub fn is_allowed(&self, path: &str) -> bool {
        self.rejection(path).is_none()
    }

    /// The first table that vetoes `path`, if any.
    pub fn rejection(&self, path: &str) -> Option<Rejection> {
        let name = path.rsplit('/').next().unwrap_or(path);

        if self.binaries.contains(name) {
            return Some(Rejection::Binary);
        }
        if self.shared_libs.contains(name) {
            return Some(Rejection::SharedLibrary);
        }
        if self.filenames.contains(name) {
            return Some(Rejection::Filename);
        }

        if let Some((stem, extension)) = name.rsplit_once('.') {
            if !stem.is_empty() && self.extensions.contains(extension) {
                return Some(Rejection::Extension);
            }
        }

        // Every segment prefix: "a", "a/b", "a/b/c" for "a/b/c".
        let mut prefix_end = 0;
        for segment in path.split('/') {
            prefix_end += segment.len();
            if let Some(folder) = self.folders.get(&path[..prefix_end]) {
                return Some(Rejection::Folder(*folder));
            }
            prefix_end += 1;
        }

        if self.paths.contains(path) {
            return Some(Rejection::Path);
        }

        self.patterns
            .iter()
            .find(|rule| {
                rule.pattern.is_match(path)
                    && !rule.except.as_ref().is_some_and(|except| except.is_match(path))
            })
            .map(|rule| Rejection::Pattern(rule.source))
    }
}
