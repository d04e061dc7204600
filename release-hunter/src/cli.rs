use clap::Parser;
use std::path::PathBuf;

use crate::credentials::resolve_token;
use crate::request::Request;

const EXAMPLES: &str = r#"Examples:
  1. Provide your token and the exact name of the user/repository:
       rh -t YOUR_GITHUB_TOKEN -r user/repo
  2. Search for repositories containing the keyword 'helm' to find user/repo for the previous example:
       rh -t YOUR_GITHUB_TOKEN -f helm
  3. List assets of a specific repository and filter by keyword 'arm':
       rh -t YOUR_GITHUB_TOKEN -r helm/helm -k arm
  4. A more accurate filter for finding the right repository:
       rh -t YOUR_GITHUB_TOKEN -f helm -k manager

Notice: if the environment variable "GITHUB_TOKEN" is set, there is no need to use the "-t" flag."#;

/// Long flag names the tool historically accepted with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &[
    "token", "repo", "find", "keyword", "help", "version", "config", "verbose",
];

/// Flags whose value arrives as the next argument.
const VALUE_FLAGS: &[&str] = &[
    "-t", "-r", "-f", "-k", "--token", "--repo", "--find", "--keyword", "--config",
];

#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "rh",
    version,
    about = "Find GitHub repositories and list download links of their latest release",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    after_help = EXAMPLES
)]
pub struct Args {
    /// GitHub personal access token
    #[clap(long = "token", value_name = "TOKEN", allow_hyphen_values = true)]
    pub token: Option<String>,

    /// GitHub personal access token (alias)
    #[clap(short = 't', value_name = "TOKEN", allow_hyphen_values = true)]
    pub token_alias: Option<String>,

    /// GitHub repository in the format user/repo
    #[clap(long = "repo", value_name = "USER/REPO", allow_hyphen_values = true)]
    pub repo: Option<String>,

    /// GitHub repository in the format user/repo (alias)
    #[clap(short = 'r', value_name = "USER/REPO", allow_hyphen_values = true)]
    pub repo_alias: Option<String>,

    /// Search GitHub repositories by keyword
    #[clap(long = "find", value_name = "TERM", allow_hyphen_values = true)]
    pub find: Option<String>,

    /// Search GitHub repositories by keyword (alias)
    #[clap(short = 'f', value_name = "TERM", allow_hyphen_values = true)]
    pub find_alias: Option<String>,

    /// Filter links by keyword, or narrow a search
    #[clap(
        short = 'k',
        long = "keyword",
        value_name = "KEYWORD",
        allow_hyphen_values = true
    )]
    pub keyword: Option<String>,

    /// Configuration file path
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[clap(long)]
    pub verbose: bool,

    /// Show usage and examples
    #[clap(short = 'h', long = "help")]
    pub help: bool,

    /// Show the CLI version
    #[clap(short = 'v', long = "version")]
    pub version: bool,
}

impl Args {
    /// Collapse flags and their aliases into a single request.
    ///
    /// `env_token` is the value of `GITHUB_TOKEN`, which takes precedence over
    /// both token flags.
    pub fn into_request(self, env_token: Option<&str>) -> Request {
        let token = resolve_token(
            self.token.as_deref(),
            self.token_alias.as_deref(),
            env_token,
        );

        Request {
            token,
            repo: prefer_alias(self.repo, self.repo_alias),
            find: prefer_alias(self.find, self.find_alias),
            keyword: self.keyword.unwrap_or_default(),
            help: self.help,
        }
    }
}

/// Non-empty alias beats the long form; empty strings count as not given.
fn prefer_alias(long: Option<String>, alias: Option<String>) -> Option<String> {
    alias
        .filter(|value| !value.is_empty())
        .or(long)
        .filter(|value| !value.is_empty())
}

/// Rewrite `-token`, `-repo` and friends into their `--` form.
///
/// The argument after a value-taking flag is its value and is left alone, so
/// `-k -linux` keeps `-linux` as the keyword.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut value_next = false;

    for arg in args {
        if passthrough || value_next {
            value_next = false;
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let arg = match arg.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let name = rest.split('=').next().unwrap_or(rest);
                if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                    format!("-{arg}")
                } else {
                    arg
                }
            }
            _ => arg,
        };
        value_next = VALUE_FLAGS.contains(&arg.as_str());
        normalized.push(arg);
    }

    normalized
}

/// Version line printed by `-v`.
pub fn version_line() -> String {
    format!("Version: v{}", env!("CARGO_PKG_VERSION"))
}
