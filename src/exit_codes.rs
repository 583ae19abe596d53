//! Exit codes for the CLI

#![allow(dead_code)]

use verbump::VerbumpError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Version string rejected by the grammar
pub const INVALID_VERSION: i32 = 3;

/// Pre-release label outside alpha/beta/rc
pub const UNKNOWN_PRERELEASE: i32 = 4;

/// Commit convention not registered
pub const UNKNOWN_CONVENTION: i32 = 5;

/// Map a typed error to its process exit code
pub fn for_error(err: &VerbumpError) -> i32 {
    match err {
        VerbumpError::InvalidVersionFormat(_) => INVALID_VERSION,
        VerbumpError::UnknownPrereleaseLabel(_) => UNKNOWN_PRERELEASE,
        VerbumpError::UnknownConvention(_) => UNKNOWN_CONVENTION,
        VerbumpError::Config(_) => CONFIG_ERROR,
        VerbumpError::Io(_) => ERROR,
    }
}
