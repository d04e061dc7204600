use crate::error::{HunterError, Result};
use crate::request::RepositoryRef;
use async_trait::async_trait;
use octocrab::{models, Octocrab};

/// The two GitHub operations the tool needs.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Search repositories, asking upstream for at most `limit` results.
    async fn search_repositories(&self, query: &str, limit: usize) -> Result<Vec<RepositoryHit>>;

    /// Latest published release, or `None` when the response carries no release.
    async fn latest_release(&self, repo: &RepositoryRef) -> Result<Option<Release>>;
}

#[async_trait]
impl<T: ReleaseSource + ?Sized> ReleaseSource for &T {
    async fn search_repositories(&self, query: &str, limit: usize) -> Result<Vec<RepositoryHit>> {
        (**self).search_repositories(query, limit).await
    }

    async fn latest_release(&self, repo: &RepositoryRef) -> Result<Option<Release>> {
        (**self).latest_release(repo).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHit {
    pub full_name: String,
    pub description: String,
}

impl From<models::Repository> for RepositoryHit {
    fn from(repo: models::Repository) -> Self {
        Self {
            full_name: repo.full_name.unwrap_or(repo.name),
            description: repo.description.unwrap_or_default(),
        }
    }
}

/// The parts of a release this tool prints.
#[derive(Debug, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl From<models::repos::Release> for Release {
    fn from(release: models::repos::Release) -> Self {
        Self {
            tag_name: release.tag_name,
            assets: release.assets.into_iter().map(ReleaseAsset::from).collect(),
        }
    }
}

impl From<models::repos::Asset> for ReleaseAsset {
    fn from(asset: models::repos::Asset) -> Self {
        Self {
            name: asset.name,
            browser_download_url: asset.browser_download_url.to_string(),
        }
    }
}

pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Build a client, authenticated when a token is given.
    ///
    /// `api_url` points the client at a GitHub Enterprise (or test) server.
    pub fn new(token: Option<String>, api_url: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

fn upstream(operation: String) -> impl FnOnce(octocrab::Error) -> HunterError {
    move |source| {
        tracing::error!("{}: {}", operation, source);
        HunterError::Upstream {
            operation,
            source: Box::new(source),
        }
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn search_repositories(&self, query: &str, limit: usize) -> Result<Vec<RepositoryHit>> {
        let operation = format!("Searching repositories for '{query}'");
        tracing::info!("{}", operation);

        let page = self
            .octocrab
            .search()
            .repositories(query)
            .per_page(u8::try_from(limit).unwrap_or(u8::MAX))
            .send()
            .await
            .map_err(upstream(operation))?;

        Ok(page
            .items
            .into_iter()
            .take(limit)
            .map(RepositoryHit::from)
            .collect())
    }

    async fn latest_release(&self, repo: &RepositoryRef) -> Result<Option<Release>> {
        let operation = format!("Fetching latest release for {repo}");
        tracing::info!("{}", operation);

        let route = format!("/repos/{}/{}/releases/latest", repo.owner, repo.name);
        let release: Option<models::repos::Release> = self
            .octocrab
            .get(route, None::<&()>)
            .await
            .map_err(upstream(operation))?;

        Ok(release.map(|release| {
            tracing::info!(
                "Found release {} with {} assets",
                release.tag_name,
                release.assets.len()
            );
            Release::from(release)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn release_json() -> serde_json::Value {
        json!({
            "url": "https://api.github.com/repos/helm/helm/releases/1",
            "html_url": "https://github.com/helm/helm/releases/tag/v3.14.0",
            "assets_url": "https://api.github.com/repos/helm/helm/releases/1/assets",
            "upload_url": "https://uploads.github.com/repos/helm/helm/releases/1/assets{?name,label}",
            "tarball_url": null,
            "zipball_url": null,
            "id": 1,
            "node_id": "RE_1",
            "tag_name": "v3.14.0",
            "target_commitish": "main",
            "name": "Helm v3.14.0",
            "body": null,
            "draft": false,
            "prerelease": false,
            "created_at": "2024-01-17T18:00:00Z",
            "published_at": "2024-01-17T18:00:00Z",
            "author": null,
            "assets": [{
                "url": "https://api.github.com/repos/helm/helm/releases/assets/10",
                "browser_download_url": "https://github.com/helm/helm/releases/download/v3.14.0/helm-linux-amd64.tar.gz",
                "id": 10,
                "node_id": "RA_10",
                "name": "helm-linux-amd64.tar.gz",
                "label": null,
                "state": "uploaded",
                "content_type": "application/gzip",
                "size": 10,
                "download_count": 0,
                "created_at": "2024-01-17T18:00:00Z",
                "updated_at": "2024-01-17T18:00:00Z",
                "uploader": null
            }]
        })
    }

    #[test]
    fn test_release_from_api_model() {
        let api: models::repos::Release = serde_json::from_value(release_json()).unwrap();
        let release = Release::from(api);
        assert_eq!(release.tag_name, "v3.14.0");
        assert_eq!(
            release.assets,
            vec![ReleaseAsset {
                name: "helm-linux-amd64.tar.gz".into(),
                browser_download_url:
                    "https://github.com/helm/helm/releases/download/v3.14.0/helm-linux-amd64.tar.gz"
                        .into(),
            }]
        );
    }

    #[test]
    fn test_null_release() {
        let release: Option<models::repos::Release> = serde_json::from_str("null").unwrap();
        assert!(release.is_none());
    }

    #[test]
    fn test_hit_without_description() {
        let repo: models::Repository = serde_json::from_value(json!({
            "id": 1,
            "name": "helm",
            "full_name": "helm/helm",
            "url": "https://api.github.com/repos/helm/helm",
            "description": null
        }))
        .unwrap();
        assert_eq!(
            RepositoryHit::from(repo),
            RepositoryHit {
                full_name: "helm/helm".into(),
                description: String::new(),
            }
        );
    }
}
