use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for GitHub release redirect lookups (5 seconds)
pub const GITHUB_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for stable-channel fetches (5 seconds)
pub const STABLE_CHANNEL_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Product identification
// =============================================================================

/// User-agent string sent with every outbound request
pub const USER_AGENT: &str = concat!("toolver/", env!("CARGO_PKG_VERSION"));
