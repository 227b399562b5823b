//! Error cases owned by release-crossref itself.
//!
//! Failures from git2, octocrab and the filesystem are propagated as-is
//! through `color_eyre`; this enum only names the conditions the tool
//! detects on its own.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrossrefError {
    #[error("git {args} failed with status {status}: {stderr}")]
    GitCommand {
        args: String,
        status: i32,
        stderr: String,
    },

    #[error(
        "malformed git log record: expected {expected} fields, found {found}"
    )]
    MalformedLogRecord { expected: usize, found: usize },

    #[error("invalid version '{input}': {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("must set github token (argument or GITHUB_TOKEN env var)")]
    MissingToken,

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}

impl CrossrefError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create an invalid version error for the given input
    pub fn invalid_version(
        input: impl Into<String>,
        source: semver::Error,
    ) -> Self {
        Self::InvalidVersion {
            input: input.into(),
            source,
        }
    }
}
