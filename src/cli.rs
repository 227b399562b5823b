//! CLI argument parsing and tracker remote configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::ContextCompat;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{
    error::CrossrefError,
    forge::config::{DEFAULT_GITHUB_REPO, GITHUB_TOKEN_ENV, RemoteConfig},
    result::Result,
};

/// Global CLI arguments for repository selection and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_GITHUB_REPO, global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, default_value = ".", global = true)]
    /// Path inside the local git checkout to inspect.
    pub repo_path: String,

    #[arg(long, global = true)]
    /// Configuration file. Defaults to crossref.toml in the repository root.
    pub config: Option<String>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release management subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare a milestone's issues and PRs against the current branch.
    Compare(CompareArgs),

    /// Build a categorized changelog for a revision range.
    Changelog(ChangelogArgs),

    /// List core changes in a range that still lack a category label.
    NeedsCategorization(NeedsCategorizationArgs),

    /// Decide whether API clients must be released alongside a version.
    ApiClientsPolicy(ApiClientsPolicyArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CompareArgs {
    /// Version whose milestone is compared (e.g. 2.9.1).
    pub target_version: String,

    /// GitHub token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long)]
    /// Only consider commits after this revision on the current branch.
    pub previous_version: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Only print items not yet on the current branch.
    pub unmerged: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ChangelogArgs {
    /// Revision the range starts after.
    pub previous_version: String,

    /// Revision the range ends at.
    pub target_version: String,

    /// GitHub token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Do not report progress on stderr.
    pub disable_progress_bar: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct NeedsCategorizationArgs {
    /// Revision the range starts after.
    pub previous_version: String,

    /// Revision the range ends at.
    pub target_version: String,

    /// GitHub token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long, default_value_t = false)]
    /// Also print uncategorized changes that do not affect core.
    pub show_skipped: bool,

    #[arg(long, default_value_t = false)]
    /// Print the files touched by each printed change.
    pub show_files: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ApiClientsPolicyArgs {
    /// Previously released version.
    pub previous_version: String,

    /// Version being released.
    pub target_version: String,
}

impl Args {
    /// Configure the tracker remote from CLI arguments and the token given
    /// to the subcommand.
    pub fn get_remote(&self, token: Option<&str>) -> Result<RemoteConfig> {
        get_github_remote(&self.github_repo, token.unwrap_or_default())
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(CrossrefError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )
        .into()),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(github_repo)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var(GITHUB_TOKEN_ENV)
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(CrossrefError::MissingToken.into());
    }

    let host = parsed
        .host
        .wrap_err("unable to parse host from github repo")?;

    let owner = parsed
        .owner
        .wrap_err("unable to parse owner from github repo")?;

    let commit_link_base_url = format!(
        "{}://{}/{}/{}/commit",
        parsed.scheme, host, owner, parsed.name
    );

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        token: SecretString::from(token),
        commit_link_base_url,
    })
}
