pub mod bump;
pub mod config;
pub mod conventions;
pub mod domain;
pub mod error;
pub mod out;

pub use error::{Result, VerbumpError};
