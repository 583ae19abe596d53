use regex::Regex;

use crate::bump;
use crate::domain::SeverityMap;

use super::CommitConvention;

/// The conventional-commits style (conventionalcommits.org)
pub struct ConventionalCommits {
    pattern: Regex,
    map: SeverityMap,
}

impl ConventionalCommits {
    pub fn new() -> Self {
        Self {
            pattern: bump::conventional_bump_pattern().clone(),
            map: bump::conventional_severity_map(),
        }
    }
}

impl Default for ConventionalCommits {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitConvention for ConventionalCommits {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn bump_pattern(&self) -> &Regex {
        &self.pattern
    }

    fn bump_map(&self) -> &SeverityMap {
        &self.map
    }

    fn example(&self) -> &'static str {
        "fix: correct minor typos in code\n\n\
         see the issue for details on the typos fixed\n\n\
         closes issue #12"
    }

    fn schema(&self) -> &'static str {
        "<type>(<scope>): <subject>\n\
         <BLANK LINE>\n\
         <body>\n\
         <BLANK LINE>\n\
         <footer>"
    }

    fn info(&self) -> &'static str {
        "Conventional commits prefix every message with a type token such as \
         feat, fix, docs or chore, optionally scoped, followed by a subject.\n\
         A message starting with feat raises a MINOR bump and a BREAKING CHANGE \
         footer raises a MAJOR bump; everything else counts as PATCH.\n\
         See https://conventionalcommits.org/ for the full specification."
    }
}
