//! Version-increment engine
//!
//! Classifies commit messages into an increment severity, sequences
//! pre-release counters and derives the next version. All functions here are
//! pure; callers supply the commit messages and the current version.

use crate::domain::{Increment, PrereleaseLabel, SeverityMap, Version};
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Default classifier pattern for conventional commits
pub const CONVENTIONAL_BUMP_PATTERN: &str = "^(BREAKING CHANGE|feat)";

static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CONVENTIONAL_BUMP_PATTERN).expect("Invalid conventional bump pattern")
});

/// The compiled default conventional-commit classifier pattern
pub fn conventional_bump_pattern() -> &'static Regex {
    &CONVENTIONAL_REGEX
}

/// The default conventional-commit severity map
///
/// "BREAKING CHANGE" maps to MAJOR, "feat" to MINOR; every other matched
/// keyword falls back to PATCH.
pub fn conventional_severity_map() -> SeverityMap {
    let mut map = SeverityMap::new(Increment::Patch);
    map.insert("BREAKING CHANGE", Increment::Major);
    map.insert("feat", Increment::Minor);
    map
}

/// Classify an ordered list of commit messages into a single increment
///
/// Each message is searched against `pattern`; the whole match text is the
/// lookup key into `map`. A matching message unconditionally overwrites the
/// running result, so the last matching message in iteration order decides
/// the increment. Messages that match nothing leave the running result
/// untouched, and with no matches at all the result stays PATCH.
///
/// # Arguments
/// * `messages` - Commit messages in log order (order is significant)
/// * `pattern` - Classifier pattern; the whole match text is the map key
/// * `map` - Matched keyword → increment mapping
pub fn find_increment(messages: &[String], pattern: &Regex, map: &SeverityMap) -> Increment {
    let mut increment = Increment::Patch;

    for message in messages {
        if let Some(found) = pattern.find(message) {
            // Later matches overwrite earlier ones
            increment = map.get(found.as_str());
        }
    }

    increment
}

/// Decide the pre-release suffix for the next version
///
/// Continuing in the same label family increments the existing counter;
/// entering a pre-release or switching family starts the counter at 0. The
/// suffix uses the long label name ("alpha1") and is normalized to the short
/// token by the version grammar on re-parse. No requested label yields an
/// empty suffix.
pub fn prerelease_suffix(current: &Version, label: Option<PrereleaseLabel>) -> String {
    let label = match label {
        Some(label) => label,
        None => return String::new(),
    };

    let number = match current.prerelease_tuple() {
        Some((existing, counter)) if existing == label => counter + 1,
        _ => 0,
    };

    format!("{}{}", label, number)
}

/// Apply release-triplet arithmetic for the next version
///
/// A current pre-release takes its triplet as-is regardless of the requested
/// increment: finalizing out of the pre-release state supersedes numeric
/// incrementing, so "1.0.0a0" bumped with PATCH yields "1.0.0".
pub fn release_suffix(current: &Version, increment: Option<Increment>) -> String {
    let (mut major, mut minor, mut patch) = current.release_triplet();

    if !current.is_prerelease() {
        match increment {
            Some(Increment::Major) => {
                major += 1;
                minor = 0;
                patch = 0;
            }
            Some(Increment::Minor) => {
                minor += 1;
                patch = 0;
            }
            Some(Increment::Patch) => {
                patch += 1;
            }
            None => {}
        }
    }

    format!("{}.{}.{}", major, minor, patch)
}

/// Generate the next version from the current one
///
/// Combines the release-triplet arithmetic with the pre-release suffix and
/// re-parses the concatenation through the version grammar, so the result is
/// always canonical.
///
/// # Arguments
/// * `current` - The version being bumped
/// * `increment` - Requested increment, or `None` for no arithmetic
/// * `prerelease` - Requested pre-release label, or `None` for a final release
///
/// # Returns
/// * `Ok(Version)` - The next version
/// * `Err` - `InvalidVersionFormat` if the concatenation is not well-formed
pub fn generate_version(
    current: &Version,
    increment: Option<Increment>,
    prerelease: Option<PrereleaseLabel>,
) -> Result<Version> {
    let release = release_suffix(current, increment);
    let pre = prerelease_suffix(current, prerelease);
    Version::parse(&format!("{}{}", release, pre))
}
