//! Increment severity and the keyword → increment mapping

use crate::error::{Result, VerbumpError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Magnitude of a version bump, ordered least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Increment {
    Patch,
    Minor,
    Major,
}

impl Increment {
    /// Parse an increment from its uppercase name
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Increment {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "MAJOR" => Ok(Increment::Major),
            "MINOR" => Ok(Increment::Minor),
            "PATCH" => Ok(Increment::Patch),
            _ => Err(VerbumpError::config(format!(
                "invalid increment '{}', expected MAJOR, MINOR or PATCH",
                s
            ))),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Increment::Major => write!(f, "MAJOR"),
            Increment::Minor => write!(f, "MINOR"),
            Increment::Patch => write!(f, "PATCH"),
        }
    }
}

/// Matched-keyword → increment mapping with an explicit declared default
///
/// A keyword without an explicit entry still classifies: it falls back to
/// the declared default instead of failing the lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityMap {
    entries: HashMap<String, Increment>,
    default: Increment,
}

impl SeverityMap {
    /// Create an empty map with the given default increment
    pub fn new(default: Increment) -> Self {
        SeverityMap {
            entries: HashMap::new(),
            default,
        }
    }

    /// Create a map from existing entries with the given default
    pub fn from_entries(entries: HashMap<String, Increment>, default: Increment) -> Self {
        SeverityMap { entries, default }
    }

    /// Map a matched keyword to an increment
    pub fn insert(&mut self, keyword: impl Into<String>, increment: Increment) {
        self.entries.insert(keyword.into(), increment);
    }

    /// Look up the increment for a matched keyword
    pub fn get(&self, keyword: &str) -> Increment {
        self.entries.get(keyword).copied().unwrap_or(self.default)
    }

    /// The increment applied for keywords with no explicit mapping
    pub fn default_increment(&self) -> Increment {
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_ordering() {
        assert!(Increment::Patch < Increment::Minor);
        assert!(Increment::Minor < Increment::Major);
    }

    #[test]
    fn test_increment_display() {
        assert_eq!(Increment::Major.to_string(), "MAJOR");
        assert_eq!(Increment::Minor.to_string(), "MINOR");
        assert_eq!(Increment::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_increment_parse() {
        assert_eq!(Increment::parse("MAJOR").unwrap(), Increment::Major);
        assert_eq!(Increment::parse("minor").unwrap(), Increment::Minor);
        assert_eq!(Increment::parse("Patch").unwrap(), Increment::Patch);
    }

    #[test]
    fn test_increment_parse_invalid() {
        assert!(Increment::parse("HUGE").is_err());
        assert!(Increment::parse("").is_err());
    }

    #[test]
    fn test_severity_map_known_keyword() {
        let mut map = SeverityMap::new(Increment::Patch);
        map.insert("feat", Increment::Minor);
        assert_eq!(map.get("feat"), Increment::Minor);
    }

    #[test]
    fn test_severity_map_unknown_keyword_falls_back() {
        let map = SeverityMap::new(Increment::Patch);
        assert_eq!(map.get("anything"), Increment::Patch);
        assert_eq!(map.default_increment(), Increment::Patch);
    }

    #[test]
    fn test_severity_map_insert_overrides() {
        let mut map = SeverityMap::new(Increment::Patch);
        map.insert("feat", Increment::Minor);
        map.insert("feat", Increment::Major);
        assert_eq!(map.get("feat"), Increment::Major);
    }

    #[test]
    fn test_severity_map_from_entries() {
        let mut entries = HashMap::new();
        entries.insert("BREAKING CHANGE".to_string(), Increment::Major);
        let map = SeverityMap::from_entries(entries, Increment::Patch);
        assert_eq!(map.get("BREAKING CHANGE"), Increment::Major);
        assert_eq!(map.get("feat"), Increment::Patch);
    }
}
