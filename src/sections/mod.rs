//! Proprietary file sections.
//!
//! A [`Section`] is static data describing which blobs belong to one named
//! group of `proprietary-files.txt`. The [`SectionRegistry`] holds them in
//! registration order, and that order is the classification priority: the
//! first section matching a file owns it.
//!
//! ```text
//! Section Definition (DATA)          →     Registry (LOGIC)
//! ─────────────────────────────            ─────────────────
//! AUDIO = Section {                        for section in registry {
//!   interfaces: ["android.hardware.audio"],    if section.match_file(path) {
//!   hardware_modules: ["audio.primary"],           return section;
//!   ..Section::EMPTY                           }
//! }                                        }
//! ```

pub mod definitions;
pub mod naming;

use std::fmt;

use regex::Regex;

use crate::common::full_match_regex;
use crate::error::Result;
use naming::{matches_hardware_module, matches_interface};

/// Matching criteria of one named section.
///
/// All paths are partition-relative. A section without criteria matches
/// nothing.
#[derive(Debug)]
pub struct Section {
    /// Header in the generated list.
    pub name: &'static str,
    /// HAL interface packages (`android.hardware.audio`).
    pub interfaces: &'static [&'static str],
    /// Legacy hardware modules (`audio.primary` for `audio.primary.<variant>.so`).
    pub hardware_modules: &'static [&'static str],
    /// Executable basenames.
    pub binaries: &'static [&'static str],
    /// Shared library names, with or without `.so`.
    pub libraries: &'static [&'static str],
    /// Basenames of any kind.
    pub filenames: &'static [&'static str],
    /// Folder prefixes (`etc/audio`).
    pub folders: &'static [&'static str],
    /// Full-match regexes over the path.
    pub patterns: &'static [&'static str],
    /// Build property key prefixes; `true` means the key must match exactly.
    pub properties_prefixes: &'static [(&'static str, bool)],
}

impl Section {
    /// A section with no criteria, the base for definitions.
    pub const EMPTY: Section = Section {
        name: "",
        interfaces: &[],
        hardware_modules: &[],
        binaries: &[],
        libraries: &[],
        filenames: &[],
        folders: &[],
        patterns: &[],
        properties_prefixes: &[],
    };

    /// Whether any file criterion is set.
    pub fn has_file_criteria(&self) -> bool {
        !(self.interfaces.is_empty()
            && self.hardware_modules.is_empty()
            && self.binaries.is_empty()
            && self.libraries.is_empty()
            && self.filenames.is_empty()
            && self.folders.is_empty()
            && self.patterns.is_empty())
    }
}

/// Which criterion claimed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    Binary,
    Library,
    Filename,
    Interface(&'static str),
    HardwareModule(&'static str),
    Folder(&'static str),
    Pattern(&'static str),
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Binary => f.write_str("binary"),
            MatchReason::Library => f.write_str("library"),
            MatchReason::Filename => f.write_str("filename"),
            MatchReason::Interface(name) => write!(f, "interface {name}"),
            MatchReason::HardwareModule(name) => write!(f, "hardware module {name}"),
            MatchReason::Folder(folder) => write!(f, "folder {folder}"),
            MatchReason::Pattern(pattern) => write!(f, "pattern {pattern}"),
        }
    }
}

/// A registered section with its patterns compiled.
#[derive(Debug)]
pub struct CompiledSection {
    section: &'static Section,
    patterns: Vec<(&'static str, Regex)>,
}

impl CompiledSection {
    pub fn compile(section: &'static Section) -> Result<Self> {
        let patterns = section
            .patterns
            .iter()
            .map(|&pattern| Ok((pattern, full_match_regex(pattern, section.name)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { section, patterns })
    }

    pub fn name(&self) -> &'static str {
        self.section.name
    }

    pub fn section(&self) -> &'static Section {
        self.section
    }

    /// Test `path` against every criterion, in fixed precedence.
    pub fn match_file(&self, path: &str) -> Option<MatchReason> {
        let section = self.section;
        let name = path.rsplit('/').next().unwrap_or(path);

        if section.binaries.contains(&name) {
            return Some(MatchReason::Binary);
        }

        let is_library = |lib: &&str| {
            name == *lib || name.strip_suffix(".so").is_some_and(|stem| stem == *lib)
        };
        if section.libraries.iter().any(is_library) {
            return Some(MatchReason::Library);
        }

        if section.filenames.contains(&name) {
            return Some(MatchReason::Filename);
        }

        if let Some(&interface) = section
            .interfaces
            .iter()
            .find(|interface| matches_interface(name, interface))
        {
            return Some(MatchReason::Interface(interface));
        }

        if let Some(&module) = section
            .hardware_modules
            .iter()
            .find(|module| matches_hardware_module(name, module))
        {
            return Some(MatchReason::HardwareModule(module));
        }

        if let Some(&folder) = section.folders.iter().find(|folder| {
            path.strip_prefix(**folder)
                .is_some_and(|rest| rest.starts_with('/'))
        }) {
            return Some(MatchReason::Folder(folder));
        }

        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(path))
            .map(|(source, _)| MatchReason::Pattern(*source))
    }

    /// Whether build property `key` is attributed to this section.
    pub fn match_property(&self, key: &str) -> bool {
        self.section
            .properties_prefixes
            .iter()
            .any(|&(prefix, exact)| if exact { key == prefix } else { key.starts_with(prefix) })
    }
}

/// Outcome of classifying one file.
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    /// Position of the section in the registry.
    pub index: usize,
    pub section: &'a CompiledSection,
    pub reason: MatchReason,
}

/// Ordered section rules.
///
/// Filled once during start-up, read-only afterwards.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<CompiledSection>,
}

impl SectionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in section, in declaration order.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for &section in definitions::ALL {
            registry.register(section)?;
        }
        Ok(registry)
    }

    /// Append a section. Later sections have lower priority.
    pub fn register(&mut self, section: &'static Section) -> Result<()> {
        self.sections.push(CompiledSection::compile(section)?);
        Ok(())
    }

    pub fn sections(&self) -> &[CompiledSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The first section claiming `path`; `None` means uncategorized.
    pub fn classify(&self, path: &str) -> Option<Classification<'_>> {
        self.sections
            .iter()
            .enumerate()
            .find_map(|(index, section)| {
                section.match_file(path).map(|reason| Classification {
                    index,
                    section,
                    reason,
                })
            })
    }

    /// Registry position of the first section claiming build property `key`.
    pub fn section_index_for_property(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.match_property(key))
    }

    /// The first section claiming build property `key`.
    pub fn section_for_property(&self, key: &str) -> Option<&CompiledSection> {
        self.section_index_for_property(key)
            .map(|index| &self.sections[index])
    }
}
