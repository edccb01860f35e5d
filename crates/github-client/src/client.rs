//! Organization client: org metadata, public repos listing and license filtering.
//!
//! `org`, `public_repos_url` and `repos_payload` are memoized per client instance; each one is
//! fetched or derived at most once (successfully) for the lifetime of the client. Nothing is
//! invalidated afterwards.

use std::sync::Arc;

use memoize::Memoized;
use nested_map::access_nested_map;
use serde_json::Value;
use tracing::info;

use crate::config::{GithubConfig, DEFAULT_API_BASE};
use crate::error::{ClientError, Result};
use crate::fetch::{HttpJsonFetcher, JsonFetcher};

/// Client for one GitHub organization.
pub struct GithubOrgClient {
    org_name: String,
    api_base: String,
    fetcher: Arc<dyn JsonFetcher>,
    org: Memoized<Value>,
    public_repos_url: Memoized<String>,
    repos_payload: Memoized<Value>,
}

impl GithubOrgClient {
    /// Creates a client for `org_name` against the public GitHub API, using `fetcher` for HTTP.
    pub fn new(org_name: impl Into<String>, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            org_name: org_name.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            fetcher,
            org: Memoized::new("org"),
            public_repos_url: Memoized::new("public_repos_url"),
            repos_payload: Memoized::new("repos_payload"),
        }
    }

    /// Creates a client with an [`HttpJsonFetcher`] built from `config`.
    pub fn from_config(org_name: impl Into<String>, config: &dyn GithubConfig) -> Result<Self> {
        let fetcher = HttpJsonFetcher::from_config(config)?;
        Ok(Self::new(org_name, Arc::new(fetcher)).with_api_base(config.api_base()))
    }

    /// Sets a different API base URL (e.g. GitHub Enterprise or a test server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// `{api_base}/orgs/{org_name}`.
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_base, self.org_name)
    }

    /// Organization metadata. Fetched once per client.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init_async(|| async {
                let url = self.org_url();
                info!(org = %self.org_name, url = %url, "step: fetch org");
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// `repos_url` of the organization. Fails with a lookup error if the org has none.
    pub async fn public_repos_url(&self) -> Result<&str> {
        let url = self
            .public_repos_url
            .get_or_try_init_async(|| async {
                let org = self.org().await?;
                let repos_url = access_nested_map(org, &["repos_url"])?;
                repos_url.as_str().map(str::to_string).ok_or_else(|| {
                    ClientError::UnexpectedPayload(format!(
                        "repos_url of org {} is not a string: {}",
                        self.org_name, repos_url
                    ))
                })
            })
            .await?;
        Ok(url.as_str())
    }

    /// Raw repository listing from `public_repos_url`. Fetched once per client.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init_async(|| async {
                let url = self.public_repos_url().await?;
                info!(org = %self.org_name, url = %url, "step: fetch repos");
                self.fetcher.get_json(url).await
            })
            .await
    }

    /// Repository names in listing order, optionally restricted to those whose `license.key`
    /// equals `license`.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().ok_or_else(|| {
            ClientError::UnexpectedPayload(format!(
                "repos payload of org {} is not an array",
                self.org_name
            ))
        })?;

        let mut names = Vec::with_capacity(repos.len());
        for repo in repos {
            if let Some(key) = license {
                if !Self::has_license(repo, key) {
                    continue;
                }
            }
            names.push(repo_name(repo)?.to_string());
        }

        info!(
            org = %self.org_name,
            license = license.unwrap_or("<any>"),
            total = repos.len(),
            matched = names.len(),
            "step: public repos listed"
        );
        Ok(names)
    }

    /// Whether `repo.license.key` equals `license_key`. A missing or malformed license is `false`.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .map(|key| key.as_str() == Some(license_key))
            .unwrap_or(false)
    }
}

fn repo_name(repo: &Value) -> Result<&str> {
    let name = access_nested_map(repo, &["name"])?;
    name.as_str()
        .ok_or_else(|| ClientError::UnexpectedPayload(format!("repo name is not a string: {}", name)))
}
