//! # release-hunter
//!
//! Find a GitHub repository and list the download links of its latest release.
//!
//! ## Overview
//!
//! `rh` works in one of two modes. Lookup mode fetches the latest release of
//! an `owner/repo` and prints the download URL of every asset, optionally
//! narrowed to names containing a keyword. Search mode queries GitHub for
//! repositories matching a term and prints the top ten, which helps find the
//! `owner/repo` to look up.
//!
//! Each invocation makes exactly one GitHub request. All flag validation
//! happens before it.
//!
//! ## Usage
//!
//! ```bash
//! # List every asset of the latest helm release
//! rh -r helm/helm
//!
//! # Only arm builds
//! rh -r helm/helm -k arm
//!
//! # Search repositories (requires a token)
//! GITHUB_TOKEN=... rh -f helm -k manager
//! ```
//!
//! ## Configuration
//!
//! An optional `release-hunter.toml` in the user config directory sets the
//! request timeout and a GitHub Enterprise API URL.

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration file handling
pub mod config;

/// Access token precedence between flags and environment
pub mod credentials;

/// Error types and error handling utilities
pub mod error;

/// Case-insensitive asset name filtering
pub mod filter;

/// GitHub API client for repository search and latest releases
pub mod github;

/// Runs a validated request against GitHub and prints the result
pub mod hunter;

/// Line-oriented rendering of search hits and asset URLs
pub mod output;

/// Request validation and mode selection
pub mod request;
