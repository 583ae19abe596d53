//! Domain logic - pure value types for versions and increments

pub mod increment;
pub mod prerelease;
pub mod version;

pub use increment::{Increment, SeverityMap};
pub use prerelease::PrereleaseLabel;
pub use version::Version;
