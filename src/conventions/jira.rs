use regex::Regex;

use crate::bump;
use crate::domain::SeverityMap;

use super::CommitConvention;

/// Jira smart-commit style
///
/// Smart commits carry issue keys and workflow commands but no severity
/// markers of their own, so bump analysis falls back to the conventional
/// pattern and map.
pub struct JiraSmartCommits {
    pattern: Regex,
    map: SeverityMap,
}

impl JiraSmartCommits {
    pub fn new() -> Self {
        Self {
            pattern: bump::conventional_bump_pattern().clone(),
            map: bump::conventional_severity_map(),
        }
    }
}

impl Default for JiraSmartCommits {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitConvention for JiraSmartCommits {
    fn name(&self) -> &'static str {
        "jira"
    }

    fn bump_pattern(&self) -> &Regex {
        &self.pattern
    }

    fn bump_map(&self) -> &SeverityMap {
        &self.map
    }

    fn example(&self) -> &'static str {
        "JRA-34 #comment corrected indent issue\n\
         JRA-35 #time 1w 2d 4h 30m Total work logged"
    }

    fn schema(&self) -> &'static str {
        "<ignored text> <ISSUE_KEY> <ignored text> #<COMMAND> <optional COMMAND_ARGUMENTS>"
    }

    fn info(&self) -> &'static str {
        "Jira smart commits reference issue keys and may carry workflow \
         commands like #comment, #time or #transition.\n\
         Smart commits do not encode change severity, so bump analysis uses \
         the conventional-commit rules.\n\
         See the Atlassian documentation on processing issues with smart \
         commit messages."
    }
}
