//! GitHub client configuration: trait and env-based implementation.

use std::env;

use crate::error::{ClientError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "github-org-client";

/// GitHub API configuration interface.
pub trait GithubConfig: Send + Sync {
    /// Base URL without trailing slash requirements (e.g. `https://api.github.com`).
    fn api_base(&self) -> &str;
    /// Bearer token; `None` for anonymous requests.
    fn token(&self) -> Option<&str>;
    /// GitHub rejects requests without a User-Agent.
    fn user_agent(&self) -> &str;
}

/// GitHub config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvGithubConfig {
    pub github_api_base: String,
    pub github_token: Option<String>,
    pub github_user_agent: String,
}

impl Default for EnvGithubConfig {
    fn default() -> Self {
        Self {
            github_api_base: DEFAULT_API_BASE.to_string(),
            github_token: None,
            github_user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GithubConfig for EnvGithubConfig {
    fn api_base(&self) -> &str {
        &self.github_api_base
    }
    fn token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }
    fn user_agent(&self) -> &str {
        &self.github_user_agent
    }
}

impl EnvGithubConfig {
    /// Load from environment variables: GITHUB_API_BASE, GITHUB_TOKEN, GITHUB_USER_AGENT.
    pub fn from_env() -> Result<Self> {
        let github_api_base = env::var("GITHUB_API_BASE")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let github_user_agent = env::var("GITHUB_USER_AGENT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let config = Self {
            github_api_base,
            github_token,
            github_user_agent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config (api base must be an http(s) URL).
    pub fn validate(&self) -> Result<()> {
        if !(self.github_api_base.starts_with("http://")
            || self.github_api_base.starts_with("https://"))
        {
            return Err(ClientError::Config(format!(
                "GITHUB_API_BASE must start with http:// or https://, got {}",
                self.github_api_base
            )));
        }
        Ok(())
    }
}
