use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use release_hunter::cli::{normalize_args, version_line, Args};
use release_hunter::config::Config;
use release_hunter::credentials::env_token;
use release_hunter::github::GitHubClient;
use release_hunter::hunter::Hunter;
use release_hunter::request::Mode;

#[tokio::main]
async fn main() -> Result<()> {
    // Accept the historical single-dash long flags (-repo, -find, ...)
    let args = Args::parse_from(normalize_args(std::env::args()));

    // Initialize tracing on stderr so stdout only carries results
    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.verbose {
        tracing::info!("Running rh with verbose output");
    }

    if args.version {
        println!("{}", version_line());
        return Ok(());
    }

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);

    // Every flag check happens here, before any request is made
    let mode = args.into_request(env_token().as_deref()).validate()?;
    if matches!(mode, Mode::Help) {
        Args::command().print_help()?;
        return Ok(());
    }

    let config = Config::load(&config_path).context("Failed to load configuration")?;
    let client = GitHubClient::new(mode.token().map(str::to_string), config.api_url())
        .context("Failed to create GitHub client")?;

    let hunter = Hunter::new(client, config.timeout());
    let mut stdout = std::io::stdout().lock();
    hunter.run(mode, &mut stdout).await?;

    Ok(())
}
