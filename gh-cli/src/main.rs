//! gh-org CLI: organization metadata, public repos (optionally by license) and raw JSON GET.
//! Config from env (GITHUB_API_BASE, GITHUB_TOKEN, GITHUB_USER_AGENT), `.env` honoured.

use anyhow::{Context, Result};
use clap::Parser;
use gh_cli::{init_tracing, render_value, select_field, Cli, Commands};
use github_client::{EnvGithubConfig, GithubOrgClient, HttpJsonFetcher, JsonFetcher};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;
    info!(command = ?cli.command, "step: gh-org start");

    let config = EnvGithubConfig::from_env()
        .context("Load GitHub config from env (GITHUB_API_BASE, GITHUB_TOKEN, GITHUB_USER_AGENT)")?;

    match cli.command {
        Commands::Org { name, field } => {
            let client = GithubOrgClient::from_config(name, &config)?;
            let org = client
                .org()
                .await
                .with_context(|| format!("Fetch org {}", client.org_name()))?;
            println!("{}", render_value(select_field(org, field.as_deref())?)?);
        }
        Commands::Repos { name, license } => {
            let client = GithubOrgClient::from_config(name, &config)?;
            let repos = client
                .public_repos(license.as_deref())
                .await
                .with_context(|| format!("List public repos of {}", client.org_name()))?;
            for repo in repos {
                println!("{}", repo);
            }
        }
        Commands::Get { url, field } => {
            let fetcher = HttpJsonFetcher::from_config(&config)?;
            let payload = fetcher
                .get_json(&url)
                .await
                .with_context(|| format!("GET {}", url))?;
            println!("{}", render_value(select_field(&payload, field.as_deref())?)?);
        }
    }

    info!("step: gh-org done");
    Ok(())
}
