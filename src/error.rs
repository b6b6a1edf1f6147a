use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("unable to determine release of tool")]
    MissingReleaseLocation,

    #[error("unexpected empty body")]
    EmptyBody,

    #[error("failed to fetch go latest version number")]
    GoVersionPattern,
}
