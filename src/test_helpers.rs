//! Common test helper functions shared across test modules.
//!
//! This module provides reusable builders for commit records, tracker issues
//! and remote configuration so tests only spell out what they assert on.
use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;

use crate::{
    forge::{
        config::RemoteConfig,
        types::{Issue, IssueState},
    },
    repo::record::CommitRecord,
};

/// Creates a test RemoteConfig pointing at apache/airflow.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        host: "github.com".to_string(),
        scheme: "https".to_string(),
        owner: "apache".to_string(),
        repo: "airflow".to_string(),
        token: SecretString::from("test-token".to_string()),
        commit_link_base_url: "https://github.com/apache/airflow/commit"
            .to_string(),
    }
}

/// Creates a commit record with a fixed author and date.
///
/// # Example
/// ```ignore
/// let commit = create_test_commit("abc123", "Fix scheduler (#100)");
/// ```
pub fn create_test_commit(id: &str, subject: &str) -> CommitRecord {
    CommitRecord {
        id: id.to_string(),
        author_name: "Test Author".to_string(),
        author_email: "author@example.com".to_string(),
        date: DateTime::parse_from_rfc3339("2024-03-01T10:15:00+00:00")
            .unwrap(),
        subject: subject.to_string(),
        body: "".to_string(),
    }
}

/// Creates an open issue or pull request with the given labels.
pub fn create_test_issue(
    number: u64,
    labels: &[&str],
    is_pull_request: bool,
) -> Issue {
    Issue {
        number,
        title: format!("Change number {number}"),
        state: IssueState::Open,
        labels: labels.iter().map(|l| l.to_string()).collect(),
        html_url: format!("https://github.com/apache/airflow/pull/{number}"),
        created_at: test_timestamp(1),
        closed_at: None,
        is_pull_request,
    }
}

/// Midnight UTC on the given day of January 2024.
pub fn test_timestamp(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

/// Collects written output as a string.
pub fn output_string(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}
