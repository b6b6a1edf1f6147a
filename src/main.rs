use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use toolver::http::ClientOptions;
use toolver::resolver::VersionResolver;
use toolver::resolvers::{GitHubReleaseResolver, GoToolchainResolver, StableChannelResolver};

#[derive(Parser)]
#[command(name = "toolver")]
#[command(version, about = "Resolves the latest release versions of developer tools")]
struct Cli {
    /// Print the result as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    insecure: bool,

    /// Override the request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the latest release tag of a GitHub repository
    Github {
        /// Repository in <owner>/<repo> form
        repo: String,
    },
    /// Resolve the current stable Kubernetes release
    Kubernetes,
    /// Resolve the latest Go toolchain version
    Go,
}

#[derive(Serialize)]
struct ResolvedVersion<'a> {
    tool: &'a str,
    version: &'a str,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let options = ClientOptions {
        timeout: cli.timeout_secs.map(Duration::from_secs),
        insecure_skip_verify: cli.insecure,
    };

    let resolver: Box<dyn VersionResolver> = match &cli.command {
        Command::Github { repo } => {
            let (owner, name) = parse_repo(repo)?;
            Box::new(GitHubReleaseResolver::new(owner, name, &options))
        }
        Command::Kubernetes => Box::new(StableChannelResolver::new(&options)),
        Command::Go => Box::new(GoToolchainResolver::new(&options)),
    };

    let version = resolver.version().await?;

    if cli.json {
        let resolved = ResolvedVersion {
            tool: resolver.source().as_str(),
            version: &version,
        };
        println!("{}", serde_json::to_string(&resolved)?);
    } else {
        println!("{}", version.trim_end());
    }

    Ok(())
}

/// Splits an `<owner>/<repo>` argument into its two parts
fn parse_repo(repo: &str) -> anyhow::Result<(&str, &str)> {
    repo.split_once('/')
        .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
        .ok_or_else(|| anyhow::anyhow!("repository must be in <owner>/<repo> form"))
}
