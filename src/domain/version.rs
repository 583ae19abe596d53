use crate::domain::prerelease::PrereleaseLabel;
use crate::error::{Result, VerbumpError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Grammar for the supported version subset: release triplet plus one
/// optional pre-release segment. No epoch, post-release, dev or local parts.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^v?(?P<major>\d+)(?:\.(?P<minor>\d+))?(?:\.(?P<patch>\d+))?(?:(?P<label>[a-z]+)(?P<number>\d+))?$",
    )
    .expect("Invalid version grammar")
});

/// Version value: release triplet with an optional pre-release segment
///
/// Immutable once built; every bump produces a new value. A pre-release
/// orders before the final release of the same triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Option<(PrereleaseLabel, u64)>,
}

impl Version {
    /// Create a final (non-pre-release) version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Attach a pre-release segment to this version
    pub fn with_prerelease(mut self, label: PrereleaseLabel, number: u64) -> Self {
        self.pre = Some((label, number));
        self
    }

    /// Parse a version from a string
    ///
    /// Accepts `MAJOR[.MINOR[.PATCH]]` optionally followed by a pre-release
    /// label ("a"/"alpha", "b"/"beta", "rc") and a counter with no separator.
    /// Missing release components are treated as 0, so "1.0" parses the same
    /// as "1.0.0". Surrounding whitespace and a single leading lowercase 'v'
    /// are tolerated; leading zeros are accepted and canonicalized away.
    ///
    /// # Arguments
    /// * `text` - Version string (e.g. "1.2.3", "v1.2", "1.1.0a0", "1.1.0alpha1")
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed version
    /// * `Err` - `InvalidVersionFormat` if the grammar does not match
    pub fn parse(text: &str) -> Result<Self> {
        let caps = VERSION_REGEX
            .captures(text.trim())
            .ok_or_else(|| VerbumpError::invalid_version(text))?;

        let major = parse_component(&caps["major"], text)?;
        let minor = match caps.name("minor") {
            Some(m) => parse_component(m.as_str(), text)?,
            None => 0,
        };
        let patch = match caps.name("patch") {
            Some(m) => parse_component(m.as_str(), text)?,
            None => 0,
        };

        let pre = match caps.name("label") {
            Some(label) => {
                let label = PrereleaseLabel::parse(label.as_str())
                    .map_err(|_| VerbumpError::invalid_version(text))?;
                let number = parse_component(&caps["number"], text)?;
                Some((label, number))
            }
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    /// The (major, minor, patch) release triplet
    pub fn release_triplet(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Whether this version carries a pre-release segment
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// The pre-release (label, counter) pair, if any
    pub fn prerelease_tuple(&self) -> Option<(PrereleaseLabel, u64)> {
        self.pre
    }
}

fn parse_component(digits: &str, original: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| VerbumpError::invalid_version(original))
}

impl FromStr for Version {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some((label, number)) = self.pre {
            write!(f, "{}{}", label.token(), number)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_release =
            (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch));
        if by_release != Ordering::Equal {
            return by_release;
        }

        // A pre-release sorts before the final release of the same triplet
        match (self.pre, other.pre) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
