use log::*;
use semver::Version;

use crate::{
    config::ApiClientsConfig,
    error::CrossrefError,
    repo::{LogRangeRequest, Vcs},
    result::Result,
};

/// Outcome of the API client release policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientReleasePolicy {
    /// Major or minor changed: clients always follow.
    VersionChanged,
    /// Both versions are equal.
    Identical,
    /// Patch release that changed the API specification. Holds the subjects
    /// of the commits responsible.
    ApiChanged(Vec<String>),
    /// Patch release whose spec changes, if any, are version bumps only.
    NoApiChange,
}

/// Parse a `major.minor.patch` version string.
pub fn parse_release_version(input: &str) -> Result<Version> {
    Version::parse(input.trim())
        .map_err(|e| CrossrefError::invalid_version(input, e).into())
}

/// Decide whether API clients need a release between two versions.
///
/// Version strings double as git revisions for the patch-level check.
pub fn evaluate(
    vcs: &dyn Vcs,
    previous: &str,
    target: &str,
    config: &ApiClientsConfig,
) -> Result<ClientReleasePolicy> {
    let previous_version = parse_release_version(previous)?;
    let target_version = parse_release_version(target)?;

    if previous_version.major != target_version.major
        || previous_version.minor != target_version.minor
    {
        return Ok(ClientReleasePolicy::VersionChanged);
    }

    if previous_version == target_version {
        return Ok(ClientReleasePolicy::Identical);
    }

    info!(
        "checking {} for changes between {previous} and {target}",
        config.spec_file
    );

    let commits = vcs.commits_in_range(LogRangeRequest {
        from: previous.to_string(),
        to: target.to_string(),
        paths: vec![config.spec_file.clone()],
    })?;

    let phrase = config.version_bump_phrase.to_lowercase();

    let api_changes = commits
        .into_iter()
        .filter(|c| !c.subject.to_lowercase().contains(&phrase))
        .map(|c| c.subject)
        .collect::<Vec<String>>();

    if api_changes.is_empty() {
        return Ok(ClientReleasePolicy::NoApiChange);
    }

    Ok(ClientReleasePolicy::ApiChanged(api_changes))
}
