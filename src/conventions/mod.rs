//! Commit-message conventions
//!
//! A convention names a commit-message style and supplies the classifier
//! inputs (bump pattern + severity map) together with the human-facing
//! example, schema and info texts shown by the CLI.

use std::sync::Arc;

use regex::Regex;

use crate::domain::SeverityMap;

mod conventional;
mod jira;

pub use conventional::ConventionalCommits;
pub use jira::JiraSmartCommits;

/// A commit-message convention
pub trait CommitConvention: Send + Sync {
    /// Registry key for this convention
    fn name(&self) -> &'static str;

    /// Compiled classifier pattern for bump analysis
    fn bump_pattern(&self) -> &Regex;

    /// Matched keyword → increment mapping for bump analysis
    fn bump_map(&self) -> &SeverityMap;

    /// A sample commit message in this convention
    fn example(&self) -> &'static str;

    /// The commit message schema
    fn schema(&self) -> &'static str;

    /// Short description of the convention
    fn info(&self) -> &'static str;
}

/// Registry of available commit conventions
pub struct ConventionRegistry {
    conventions: Vec<Arc<dyn CommitConvention>>,
}

impl ConventionRegistry {
    /// Create a new registry with all built-in conventions
    pub fn new() -> Self {
        Self {
            conventions: vec![
                Arc::new(ConventionalCommits::new()),
                Arc::new(JiraSmartCommits::new()),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            conventions: Vec::new(),
        }
    }

    /// Register a convention
    pub fn register<C: CommitConvention + 'static>(&mut self, convention: C) {
        self.conventions.push(Arc::new(convention));
    }

    /// Get a convention by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommitConvention>> {
        self.conventions.iter().find(|c| c.name() == name).cloned()
    }

    /// Get all registered convention names
    pub fn names(&self) -> Vec<&'static str> {
        self.conventions.iter().map(|c| c.name()).collect()
    }
}

impl Default for ConventionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
