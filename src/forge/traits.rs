//! Traits related to the remote issue tracker
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{
        config::RemoteConfig,
        types::{Issue, MilestoneSearchRequest, PullRequestStatus},
    },
    result::Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    async fn search_milestone(
        &self,
        req: MilestoneSearchRequest,
    ) -> Result<Vec<Issue>>;
    async fn get_issue(&self, number: u64) -> Result<Issue>;
    async fn get_pull_request_status(
        &self,
        number: u64,
    ) -> Result<PullRequestStatus>;
}
