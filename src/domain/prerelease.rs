//! Pre-release labels for the version grammar
//!
//! Supports the alpha/beta/rc pre-release families. Each label has a long
//! name ("alpha") used on the command line and by the sequencer, and a short
//! grammar token ("a") used in the canonical version form.

use crate::error::{Result, VerbumpError};
use std::fmt;
use std::str::FromStr;

/// Pre-release label, ordered by release precedence (alpha < beta < rc)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseLabel {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
}

impl PrereleaseLabel {
    /// Parse a label from a string
    ///
    /// Accepts the long names "alpha", "beta", "rc" and the short grammar
    /// tokens "a" and "b". Anything else is rejected.
    ///
    /// # Arguments
    /// * `s` - String to parse
    ///
    /// # Returns
    /// * `Ok(PrereleaseLabel)` - Parsed label
    /// * `Err` - `UnknownPrereleaseLabel` for anything outside the set
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Grammar token used in canonical version strings ("a", "b", "rc")
    pub fn token(self) -> &'static str {
        match self {
            PrereleaseLabel::Alpha => "a",
            PrereleaseLabel::Beta => "b",
            PrereleaseLabel::Rc => "rc",
        }
    }

    /// Long label name ("alpha", "beta", "rc")
    pub fn name(self) -> &'static str {
        match self {
            PrereleaseLabel::Alpha => "alpha",
            PrereleaseLabel::Beta => "beta",
            PrereleaseLabel::Rc => "rc",
        }
    }
}

impl FromStr for PrereleaseLabel {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PrereleaseLabel::Alpha),
            "beta" | "b" => Ok(PrereleaseLabel::Beta),
            "rc" => Ok(PrereleaseLabel::Rc),
            _ => Err(VerbumpError::unknown_prerelease(s)),
        }
    }
}

impl fmt::Display for PrereleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse_long_names() {
        assert_eq!(
            PrereleaseLabel::parse("alpha").unwrap(),
            PrereleaseLabel::Alpha
        );
        assert_eq!(
            PrereleaseLabel::parse("beta").unwrap(),
            PrereleaseLabel::Beta
        );
        assert_eq!(PrereleaseLabel::parse("rc").unwrap(), PrereleaseLabel::Rc);
    }

    #[test]
    fn test_label_parse_short_tokens() {
        assert_eq!(PrereleaseLabel::parse("a").unwrap(), PrereleaseLabel::Alpha);
        assert_eq!(PrereleaseLabel::parse("b").unwrap(), PrereleaseLabel::Beta);
    }

    #[test]
    fn test_label_parse_case_insensitive() {
        assert_eq!(
            PrereleaseLabel::parse("ALPHA").unwrap(),
            PrereleaseLabel::Alpha
        );
        assert_eq!(PrereleaseLabel::parse("Rc").unwrap(), PrereleaseLabel::Rc);
    }

    #[test]
    fn test_label_parse_unknown() {
        assert!(PrereleaseLabel::parse("gamma").is_err());
        assert!(PrereleaseLabel::parse("dev").is_err());
        assert!(PrereleaseLabel::parse("").is_err());
    }

    #[test]
    fn test_label_parse_error_carries_input() {
        let err = PrereleaseLabel::parse("gamma").unwrap_err();
        assert!(err.to_string().contains("gamma"));
    }

    #[test]
    fn test_label_tokens() {
        assert_eq!(PrereleaseLabel::Alpha.token(), "a");
        assert_eq!(PrereleaseLabel::Beta.token(), "b");
        assert_eq!(PrereleaseLabel::Rc.token(), "rc");
    }

    #[test]
    fn test_label_display_long_name() {
        assert_eq!(PrereleaseLabel::Alpha.to_string(), "alpha");
        assert_eq!(PrereleaseLabel::Beta.to_string(), "beta");
        assert_eq!(PrereleaseLabel::Rc.to_string(), "rc");
    }

    #[test]
    fn test_label_ordering() {
        assert!(PrereleaseLabel::Alpha < PrereleaseLabel::Beta);
        assert!(PrereleaseLabel::Beta < PrereleaseLabel::Rc);
    }
}
