use thiserror::Error;

/// Unified error type for verbump operations
#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("Invalid version format: '{0}'")]
    InvalidVersionFormat(String),

    #[error("Unknown pre-release label: '{0}', expected alpha, beta or rc")]
    UnknownPrereleaseLabel(String),

    #[error("Unknown commit convention: '{0}'")]
    UnknownConvention(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verbump
pub type Result<T> = std::result::Result<T, VerbumpError>;

impl VerbumpError {
    /// Create an invalid-version error carrying the offending input
    pub fn invalid_version(text: impl Into<String>) -> Self {
        VerbumpError::InvalidVersionFormat(text.into())
    }

    /// Create an unknown pre-release label error
    pub fn unknown_prerelease(label: impl Into<String>) -> Self {
        VerbumpError::UnknownPrereleaseLabel(label.into())
    }

    /// Create an unknown convention error
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        VerbumpError::UnknownConvention(name.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerbumpError::Config(msg.into())
    }
}
