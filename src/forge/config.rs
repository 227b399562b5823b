//! Configuration for the issue tracker connection.
use secrecy::SecretString;

/// Default repository cross-referenced by every command.
pub const DEFAULT_GITHUB_REPO: &str = "https://github.com/apache/airflow";
/// Environment variable consulted when no token argument is given.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Page size for search queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// querying the issue tracker.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
    /// Base URL for commit links in reports.
    pub commit_link_base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "".to_string(),
            scheme: "".to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
            commit_link_base_url: "".to_string(),
        }
    }
}

impl RemoteConfig {
    /// `owner/repo` slug used in search qualifiers.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Link to a commit in the web interface.
    pub fn commit_link(&self, id: &str) -> String {
        format!("{}/{}", self.commit_link_base_url, id)
    }
}
