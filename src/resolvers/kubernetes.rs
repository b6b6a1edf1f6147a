//! Kubernetes stable channel resolver

use crate::config::STABLE_CHANNEL_TIMEOUT;
use crate::error::ResolveError;
use crate::http::{ClientOptions, build_client};
use crate::resolver::VersionResolver;
use crate::types::ToolSource;

/// Default base URL for the Kubernetes release CDN
const DEFAULT_BASE_URL: &str = "https://cdn.dl.k8s.io";

/// Resolver for the Kubernetes stable release channel
///
/// The channel file always holds the current recommended release. Its content
/// is returned verbatim: callers receive exactly the published bytes,
/// trailing newline included.
pub struct StableChannelResolver {
    client: reqwest::Client,
    base_url: String,
}

impl StableChannelResolver {
    /// Creates a resolver against the Kubernetes release CDN
    pub fn new(options: &ClientOptions) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, options)
    }

    /// Creates a resolver against a custom base URL
    pub fn with_base_url(base_url: &str, options: &ClientOptions) -> Self {
        Self {
            client: build_client(
                options.timeout.or(Some(STABLE_CHANNEL_TIMEOUT)),
                false,
                options.insecure_skip_verify,
            )
            .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for StableChannelResolver {
    fn default() -> Self {
        Self::new(&ClientOptions::default())
    }
}

#[async_trait::async_trait]
impl VersionResolver for StableChannelResolver {
    fn source(&self) -> ToolSource {
        ToolSource::KubernetesStable
    }

    async fn version(&self) -> Result<String, ResolveError> {
        let url = format!("{}/release/stable.txt", self.base_url);

        let response = self.client.get(&url).send().await?;

        // The channel body is the version; it is not trimmed or validated.
        let version = response.text().await?;
        Ok(version)
    }
}
