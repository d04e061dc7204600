use std::future::Future;
use std::io::Write;
use std::time::Duration;

use crate::error::{HunterError, Result};
use crate::filter::filter_assets;
use crate::github::ReleaseSource;
use crate::output::{self, NO_RELEASE_MESSAGE, SEARCH_RESULT_LIMIT};
use crate::request::{Mode, RepositoryRef, SearchQuery};

/// How a run ended, for callers that care beyond the printed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was requested; nothing was fetched.
    Help,
    /// Number of lines written.
    Listed(usize),
    /// The repository has no published release.
    NoRelease,
}

/// Runs a validated request against a release source, making one upstream call.
pub struct Hunter<S> {
    source: S,
    timeout: Duration,
}

impl<S: ReleaseSource> Hunter<S> {
    pub fn new(source: S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub async fn run<W: Write>(&self, mode: Mode, out: &mut W) -> Result<Outcome> {
        match mode {
            Mode::Help => Ok(Outcome::Help),
            Mode::Search { query, .. } => self.search(&query, out).await,
            Mode::Lookup { repo, keyword, .. } => self.lookup(&repo, &keyword, out).await,
        }
    }

    async fn search<W: Write>(&self, query: &SearchQuery, out: &mut W) -> Result<Outcome> {
        let q = query.query();
        let hits = self
            .bounded(
                "Repository search",
                self.source.search_repositories(&q, SEARCH_RESULT_LIMIT),
            )
            .await?;

        tracing::info!("Search for '{}' returned {} repositories", q, hits.len());
        output::write_search_hits(out, &hits)?;
        Ok(Outcome::Listed(hits.len().min(SEARCH_RESULT_LIMIT)))
    }

    async fn lookup<W: Write>(
        &self,
        repo: &RepositoryRef,
        keyword: &str,
        out: &mut W,
    ) -> Result<Outcome> {
        let release = self
            .bounded("Latest release lookup", self.source.latest_release(repo))
            .await?;

        let Some(release) = release else {
            writeln!(out, "{NO_RELEASE_MESSAGE}")?;
            return Ok(Outcome::NoRelease);
        };

        let assets = filter_assets(&release.assets, keyword);
        tracing::info!(
            "{} of {} assets in {} match '{}'",
            assets.len(),
            release.assets.len(),
            repo,
            keyword
        );
        output::write_asset_urls(out, &assets)?;
        Ok(Outcome::Listed(assets.len()))
    }

    async fn bounded<T, F>(&self, operation: &str, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                tracing::error!("{} exceeded {:?}", operation, self.timeout);
                HunterError::Timeout {
                    operation: operation.to_string(),
                    seconds: self.timeout.as_secs(),
                }
            })?
    }
}
