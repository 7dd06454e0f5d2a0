use std::path::PathBuf;

use thiserror::Error;

pub type IssueResult<T> = Result<T, IssueError>;

/// Failure modes of a single issuance attempt. Each invocation is one
/// final attempt; nothing here is retried or recovered.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("private key file not found at {}", path.display())]
    KeyNotFound { path: PathBuf },
    #[error("failed to generate token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for IssueError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        Self::Signing(value.to_string())
    }
}
