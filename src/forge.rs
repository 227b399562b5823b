//! GitHub issue tracker access.
//!
//! Provides token-based authentication and the read-only issue, pull request
//! and milestone queries the reporters correlate against git history.

/// Configuration and authentication for the tracker connection.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for tracker access, mocked in tests.
pub mod traits;

/// Shared data types for issues, pull requests and search requests.
pub mod types;
