//! Shared HTTP client construction
//!
//! Every resolver builds its client through [`build_client`] so that the
//! product user agent, redirect policy, and timeout handling stay uniform.

use std::time::Duration;

use crate::config;

/// Caller-supplied overrides for client construction
///
/// A `None` timeout means "use the resolver's own default": a bounded value
/// for resolvers that require one, or the client default otherwise.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub timeout: Option<Duration>,
    pub insecure_skip_verify: bool,
}

/// Builds a `reqwest::Client` with the product user agent applied
///
/// # Arguments
/// * `timeout` - Request timeout; `None` keeps the client default
/// * `follow_redirects` - When false, redirect responses are returned raw
/// * `insecure_skip_verify` - Disables TLS certificate verification
pub fn build_client(
    timeout: Option<Duration>,
    follow_redirects: bool,
    insecure_skip_verify: bool,
) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config::USER_AGENT);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    if !follow_redirects {
        builder = builder.redirect(reqwest::redirect::Policy::none());
    }
    if insecure_skip_verify {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build()
}
