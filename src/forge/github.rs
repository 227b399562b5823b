//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, models};

use crate::{
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        traits::Forge,
        types::{
            Issue, IssueState, MilestoneSearchRequest, PullRequestStatus,
        },
    },
    result::Result,
};

/// GitHub tracker implementation using Octocrab for issue, pull request and
/// milestone queries.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration. Must be called from within a tokio runtime.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri)?
            .build()?;

        Ok(Self { config, instance })
    }
}

fn to_issue(issue: models::issues::Issue) -> Issue {
    let state = match issue.state {
        models::IssueState::Open => IssueState::Open,
        _ => IssueState::Closed,
    };

    Issue {
        number: issue.number,
        title: issue.title,
        state,
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
        html_url: issue.html_url.to_string(),
        created_at: issue.created_at,
        closed_at: issue.closed_at,
        is_pull_request: issue.pull_request.is_some(),
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn search_milestone(
        &self,
        req: MilestoneSearchRequest,
    ) -> Result<Vec<Issue>> {
        let query = format!(
            r#"repo:{} milestone:"{}" {}"#,
            self.config.slug(),
            req.milestone,
            req.kind.qualifier()
        );

        info!("searching issues: {query}");

        let page = self
            .instance
            .search()
            .issues_and_pull_requests(&query)
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        let items = self.instance.all_pages(page).await?;

        debug!("found {} results for: {query}", items.len());

        Ok(items.into_iter().map(to_issue).collect())
    }

    async fn get_issue(&self, number: u64) -> Result<Issue> {
        debug!("fetching issue #{number}");

        let issue = self
            .instance
            .issues(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        Ok(to_issue(issue))
    }

    async fn get_pull_request_status(
        &self,
        number: u64,
    ) -> Result<PullRequestStatus> {
        debug!("fetching merge status for pull request #{number}");

        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        Ok(PullRequestStatus {
            merged: pr.merged.unwrap_or(pr.merged_at.is_some()),
            merge_commit_sha: pr.merge_commit_sha,
        })
    }
}
