//! CLI parser and output helpers.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nested_map::{access_nested_map, parse_dotted_path};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "gh-org")]
#[command(about = "GitHub organization CLI: org metadata, public repos, raw JSON GET", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print organization metadata, or one field of it (dotted path, e.g. `repos_url`).
    Org {
        name: String,
        #[arg(short, long)]
        field: Option<String>,
    },
    /// Print public repository names, one per line.
    Repos {
        name: String,
        /// Only repos whose license key matches (e.g. `apache-2.0`).
        #[arg(short, long)]
        license: Option<String>,
    },
    /// GET any URL and print the decoded JSON, or one field of it.
    Get {
        url: String,
        #[arg(short, long)]
        field: Option<String>,
    },
}

/// Returns `value` itself, or the value at the dotted `field` path.
/// A field with no keys (`""`, `"."`) is rejected.
pub fn select_field<'a>(value: &'a Value, field: Option<&str>) -> Result<&'a Value> {
    match field {
        None => Ok(value),
        Some(field) => {
            let path = parse_dotted_path(field);
            if path.is_empty() {
                bail!("Field `{}` names no keys; use a dotted path such as `repos_url`", field);
            }
            access_nested_map(value, &path).with_context(|| format!("Select field `{}`", field))
        }
    }
}

/// Strings print bare; everything else prints as pretty JSON.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string_pretty(other).context("Render JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_repos_with_license() {
        let cli = Cli::try_parse_from(["gh-org", "repos", "google", "--license", "apache-2.0"])
            .unwrap();
        assert_eq!(
            cli.command,
            Commands::Repos {
                name: "google".to_string(),
                license: Some("apache-2.0".to_string()),
            }
        );
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_parse_org_with_field_and_log_file() {
        let cli = Cli::try_parse_from([
            "gh-org", "org", "abc", "-f", "repos_url", "--log-file", "gh.log",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Org {
                name: "abc".to_string(),
                field: Some("repos_url".to_string()),
            }
        );
        assert_eq!(cli.log_file.as_deref(), Some("gh.log"));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["gh-org"]).is_err());
    }

    #[test]
    fn test_select_field() {
        let org = json!({"login": "google", "plan": {"name": "free"}});
        assert_eq!(select_field(&org, None).unwrap(), &org);
        assert_eq!(select_field(&org, Some("plan.name")).unwrap(), "free");

        let err = select_field(&org, Some("plan.seats")).unwrap_err();
        let key = err.downcast_ref::<nested_map::NestedMapError>().unwrap().key();
        assert_eq!(key, "seats");
    }

    #[test]
    fn test_select_field_rejects_empty_path() {
        let org = json!({"login": "google"});
        for field in ["", ".", ".."] {
            let err = select_field(&org, Some(field)).unwrap_err();
            assert!(err.to_string().contains("names no keys"), "field {:?}", field);
        }
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("https://api.github.com/orgs/google/repos")).unwrap(),
            "https://api.github.com/orgs/google/repos");
        assert_eq!(render_value(&json!({"a": 1})).unwrap(), "{\n  \"a\": 1\n}");
    }
}
