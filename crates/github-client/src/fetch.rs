//! HTTP GET with JSON decoding.
//!
//! [`JsonFetcher`] is the seam between the org client and the network; [`HttpJsonFetcher`]
//! implements it with reqwest. Tests substitute their own implementation.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{EnvGithubConfig, GithubConfig};
use crate::error::{ClientError, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Fetches a URL and decodes the body as JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues one GET to `url` and returns the decoded JSON body.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Masks a token for safe logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the token.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// reqwest-based [`JsonFetcher`] for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct HttpJsonFetcher {
    client: Client,
    token: Option<String>,
}

impl HttpJsonFetcher {
    /// Anonymous fetcher with the default User-Agent.
    pub fn new() -> Result<Self> {
        Self::from_config(&EnvGithubConfig::default())
    }

    /// Builds a fetcher using the config's User-Agent and token.
    pub fn from_config(config: &dyn GithubConfig) -> Result<Self> {
        let client = Client::builder().user_agent(config.user_agent()).build()?;
        let token = config.token().map(str::to_string);
        info!(
            user_agent = %config.user_agent(),
            token = %token.as_deref().map(mask_token).unwrap_or_else(|| "<none>".to_string()),
            "step: GitHub HTTP client created"
        );
        Ok(Self { client, token })
    }
}

#[async_trait]
impl JsonFetcher for HttpJsonFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        info!(url = %url, "step: GitHub GET request");

        let mut request = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => unreadable_body(url, &e),
            };
            warn!(url = %url, status = status.as_u16(), "step: GitHub GET failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        info!(url = %url, kind = json_kind(&payload), "step: GitHub GET done");
        Ok(payload)
    }
}

/// One-shot GET with an anonymous [`HttpJsonFetcher`].
pub async fn get_json(url: &str) -> Result<Value> {
    HttpJsonFetcher::new()?.get_json(url).await
}

/// Stand-in body for a failed response whose body could not be read.
fn unreadable_body(url: &str, error: &reqwest::Error) -> String {
    warn!(url = %url, error = %error, "step: GitHub error body unreadable");
    format!("<body unreadable: {}>", error)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
