//! Error types
//!
//! Setup errors are fatal and bubble up to `main`. Lookup errors never leave
//! the resolver; they are folded into a `Resolution`.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors while collecting candidate names
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("charts root does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("charts root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Failure of a single icon lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else {
            LookupError::Transport(err)
        }
    }
}
