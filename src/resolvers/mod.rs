//! Concrete resolver implementations

pub mod github;
pub mod go;
pub mod kubernetes;

pub use github::GitHubReleaseResolver;
pub use go::GoToolchainResolver;
pub use kubernetes::StableChannelResolver;
