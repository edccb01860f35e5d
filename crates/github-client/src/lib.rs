//! # GitHub organization client
//!
//! Fetches organization metadata and public repository listings from the GitHub REST API and
//! filters repositories by license key.
//!
//! - [`GithubOrgClient`]: per-organization client; `org`, `public_repos_url` and the repository
//!   listing are memoized for the lifetime of the client.
//! - [`JsonFetcher`]: HTTP GET + JSON decoding seam, implemented by [`HttpJsonFetcher`] (reqwest).
//! - [`EnvGithubConfig`]: API base, token and User-Agent from environment variables.
//!
//! ## Example
//!
//! ```rust,no_run
//! use github_client::{EnvGithubConfig, GithubOrgClient};
//!
//! async fn example() -> github_client::Result<()> {
//!     let config = EnvGithubConfig::from_env()?;
//!     let client = GithubOrgClient::from_config("google", &config)?;
//!     for name in client.public_repos(Some("apache-2.0")).await? {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;

pub use client::GithubOrgClient;
pub use config::{EnvGithubConfig, GithubConfig, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
pub use error::{ClientError, Result};
pub use fetch::{get_json, mask_token, HttpJsonFetcher, JsonFetcher};
pub use nested_map::{access_nested_map, NestedMapError};
