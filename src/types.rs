//! Common types for version resolution

/// Upstream source a resolver queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolSource {
    /// GitHub release redirect (github.com/<owner>/<repo>/releases/latest)
    GitHubRelease,
    /// Kubernetes stable channel (cdn.dl.k8s.io/release/stable.txt)
    KubernetesStable,
    /// Go toolchain version listing (go.dev/VERSION)
    GoToolchain,
}

impl ToolSource {
    /// Returns the string representation of the source
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolSource::GitHubRelease => "github_release",
            ToolSource::KubernetesStable => "kubernetes_stable",
            ToolSource::GoToolchain => "go_toolchain",
        }
    }
}
