//! Go toolchain version resolver

use regex::Regex;
use reqwest::StatusCode;
use tracing::warn;

use crate::error::ResolveError;
use crate::http::{ClientOptions, build_client};
use crate::resolver::VersionResolver;
use crate::types::ToolSource;

/// Default base URL for the Go project site
const DEFAULT_BASE_URL: &str = "https://go.dev";

/// Resolver for the latest stable Go toolchain
///
/// The version listing starts with a line like `go1.22.1`; the leading `go`
/// is stripped and the dotted number is returned.
pub struct GoToolchainResolver {
    client: reqwest::Client,
    base_url: String,
    version_re: Regex,
}

impl GoToolchainResolver {
    /// Creates a resolver against go.dev
    pub fn new(options: &ClientOptions) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, options)
    }

    /// Creates a resolver against a custom base URL
    pub fn with_base_url(base_url: &str, options: &ClientOptions) -> Self {
        Self {
            client: build_client(options.timeout, true, options.insecure_skip_verify)
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            version_re: Regex::new(r"^go(\d+\.\d+\.\d+)").unwrap(),
        }
    }
}

impl Default for GoToolchainResolver {
    fn default() -> Self {
        Self::new(&ClientOptions::default())
    }
}

#[async_trait::async_trait]
impl VersionResolver for GoToolchainResolver {
    fn source(&self) -> ToolSource {
        ToolSource::GoToolchain
    }

    async fn version(&self) -> Result<String, ResolveError> {
        let url = format!("{}/VERSION?m=text", self.base_url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!("go.dev returned status {}: {}", status, url);
            return Err(ResolveError::UnexpectedStatus(status));
        }
        if body.is_empty() {
            return Err(ResolveError::EmptyBody);
        }

        let content = body.trim();
        let version = self
            .version_re
            .captures(content)
            .and_then(|captures| captures.get(1))
            .ok_or(ResolveError::GoVersionPattern)?;

        Ok(version.as_str().to_string())
    }
}
