use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NestedMapError {
    /// The payload is the key that failed, not the full path.
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),
}

impl NestedMapError {
    /// The key that could not be resolved.
    pub fn key(&self) -> &str {
        match self {
            NestedMapError::KeyNotFound(key) => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, NestedMapError>;
