use nested_map::NestedMapError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}) for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Lookup error: {0}")]
    Lookup(#[from] NestedMapError),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
