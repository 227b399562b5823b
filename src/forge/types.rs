use chrono::{DateTime, Utc};
use std::fmt;

/// Open or closed state of an issue or pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueState {
    Open,
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => f.pad("open"),
            IssueState::Closed => f.pad("closed"),
        }
    }
}

/// Distinguishes the two milestone queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl IssueKind {
    /// Search qualifier selecting this kind.
    pub fn qualifier(&self) -> &'static str {
        match self {
            IssueKind::Issue => "is:issue",
            IssueKind::PullRequest => "is:pull-request",
        }
    }
}

/// Normalized issue or pull request returned by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    /// Label names in the order the tracker returns them.
    pub labels: Vec<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub is_pull_request: bool,
}

impl Issue {
    /// Close time, or creation time for items still open.
    pub fn sort_timestamp(&self) -> DateTime<Utc> {
        self.closed_at.unwrap_or(self.created_at)
    }
}

/// Merge metadata for a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestStatus {
    pub merged: bool,
    pub merge_commit_sha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to list every issue or pull request attached to a milestone.
pub struct MilestoneSearchRequest {
    pub milestone: String,
    pub kind: IssueKind,
}
