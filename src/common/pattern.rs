//! Regex helpers shared by the ignore tables and the section rules.

use regex::Regex;

use crate::error::{DtError, Result};

/// Compile `pattern` so that it must match a whole path, not a substring.
///
/// `owner` names the table or section the pattern belongs to, for errors.
pub fn full_match_regex(pattern: &str, owner: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| DtError::InvalidPattern {
        owner: owner.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
