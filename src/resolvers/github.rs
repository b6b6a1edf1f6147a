//! GitHub release redirect resolver

use reqwest::StatusCode;
use reqwest::header::LOCATION;
use tracing::warn;

use crate::config::GITHUB_TIMEOUT;
use crate::error::ResolveError;
use crate::http::{ClientOptions, build_client};
use crate::resolver::VersionResolver;
use crate::types::ToolSource;

/// Default base URL for GitHub
const DEFAULT_BASE_URL: &str = "https://github.com";

/// Resolver that reads the release tag out of GitHub's "latest" redirect
///
/// GitHub redirects `/<owner>/<repo>/releases/latest` to the tag URL of the
/// newest release, so a HEAD request with redirect-following disabled exposes
/// the tag as the final path segment of the `Location` header.
pub struct GitHubReleaseResolver {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
}

impl GitHubReleaseResolver {
    /// Creates a resolver for `owner/repo` against github.com
    pub fn new(owner: &str, repo: &str, options: &ClientOptions) -> Self {
        Self::with_base_url(owner, repo, DEFAULT_BASE_URL, options)
    }

    /// Creates a resolver against a custom base URL
    pub fn with_base_url(
        owner: &str,
        repo: &str,
        base_url: &str,
        options: &ClientOptions,
    ) -> Self {
        Self {
            client: build_client(
                options.timeout.or(Some(GITHUB_TIMEOUT)),
                false,
                options.insecure_skip_verify,
            )
            .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }
}

/// Returns the final path segment of a redirect target.
/// A value without any `/` is returned whole.
fn tag_from_location(location: &str) -> &str {
    location.rsplit('/').next().unwrap_or(location)
}

#[async_trait::async_trait]
impl VersionResolver for GitHubReleaseResolver {
    fn source(&self) -> ToolSource {
        ToolSource::GitHubRelease
    }

    async fn version(&self) -> Result<String, ResolveError> {
        let url = format!(
            "{}/{}/{}/releases/latest",
            self.base_url, self.owner, self.repo
        );

        let response = self.client.head(&url).send().await?;

        let status = response.status();
        if status != StatusCode::MOVED_PERMANENTLY && status != StatusCode::FOUND {
            warn!("GitHub returned status {}: {}", status, url);
            return Err(ResolveError::UnexpectedStatus(status));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if location.is_empty() {
            return Err(ResolveError::MissingReleaseLocation);
        }

        Ok(tag_from_location(location).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use rstest::rstest;

    #[tokio::test]
    async fn version_returns_tag_from_redirect_location() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(302)
            .with_header(
                "location",
                "https://github.com/owner/repo/releases/tag/v1.2.3",
            )
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let version = resolver.version().await.unwrap();

        mock.assert_async().await;
        assert_eq!(version, "v1.2.3");
    }

    #[tokio::test]
    async fn version_accepts_moved_permanently() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(301)
            .with_header(
                "location",
                "https://github.com/owner/repo/releases/tag/v2.0.0",
            )
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let version = resolver.version().await.unwrap();

        mock.assert_async().await;
        assert_eq!(version, "v2.0.0");
    }

    #[tokio::test]
    async fn version_fails_on_non_redirect_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(200)
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let result = resolver.version().await;

        mock.assert_async().await;
        let error = result.unwrap_err();
        assert!(matches!(error, ResolveError::UnexpectedStatus(_)));
        assert!(error.to_string().contains("200"));
    }

    #[tokio::test]
    async fn version_fails_on_redirect_without_location() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(302)
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let result = resolver.version().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ResolveError::MissingReleaseLocation)
        ));
    }

    #[tokio::test]
    async fn version_returns_whole_location_when_it_has_no_slash() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(302)
            .with_header("location", "v9.9.9")
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let version = resolver.version().await.unwrap();

        mock.assert_async().await;
        assert_eq!(version, "v9.9.9");
    }

    #[tokio::test]
    async fn version_is_idempotent_against_an_unchanged_upstream() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("HEAD", "/owner/repo/releases/latest")
            .with_status(302)
            .with_header(
                "location",
                "https://github.com/owner/repo/releases/tag/v1.2.3",
            )
            .expect(2)
            .create_async()
            .await;

        let resolver = GitHubReleaseResolver::with_base_url(
            "owner",
            "repo",
            &server.url(),
            &ClientOptions::default(),
        );
        let first = resolver.version().await.unwrap();
        let second = resolver.version().await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
    }

    #[rstest]
    #[case("https://github.com/owner/repo/releases/tag/v1.2.3", "v1.2.3")]
    #[case("v9.9.9", "v9.9.9")]
    #[case("https://github.com/owner/repo/releases/tag/", "")]
    fn tag_from_location_returns_final_path_segment(
        #[case] location: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(tag_from_location(location), expected);
    }
}
