//! Latest-version resolution for developer tools
//!
//! Each supported upstream publishes its current release differently: GitHub
//! redirects a well-known `releases/latest` URL to the newest tag, the
//! Kubernetes project serves a stable-channel text file, and the Go project
//! serves a plain-text version listing. Every strategy implements the
//! [`resolver::VersionResolver`] trait, so callers pick a resolver and get
//! back a version string or a classified error.
//!
//! # Modules
//!
//! - [`config`]: Timeout constants and the product user agent
//! - [`error`]: Error type for resolution failures
//! - [`http`]: Shared HTTP client construction
//! - [`resolver`]: The `VersionResolver` trait
//! - [`resolvers`]: Concrete resolver implementations
//! - [`types`]: Common types like `ToolSource`

pub mod config;
pub mod error;
pub mod http;
pub mod resolver;
pub mod resolvers;
pub mod types;
