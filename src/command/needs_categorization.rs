//! Lists core-affecting changes that would land in the default changelog
//! section, so they can be labelled before the changelog is generated.
use log::*;
use std::io::Write;

use crate::{
    analyzer::{
        core_files::is_core_commit, reference::extract_issue_reference,
    },
    cli::NeedsCategorizationArgs,
    command::common::classify_reference,
    config::Config,
    forge::traits::Forge,
    repo::{LogRangeRequest, Vcs},
    result::Result,
};

const SKIPPED_PREFIX: &str = "SKIPPED: ";

/// Walk the range and print each uncategorized item as soon as it is known.
pub async fn execute<W: Write>(
    vcs: &dyn Vcs,
    forge: &dyn Forge,
    config: &Config,
    args: &NeedsCategorizationArgs,
    out: &mut W,
) -> Result<()> {
    let commits = vcs.commits_in_range(LogRangeRequest {
        from: args.previous_version.clone(),
        to: args.target_version.clone(),
        paths: vec![],
    })?;

    info!(
        "checking {} commits in {}..{} for missing categories",
        commits.len(),
        args.previous_version,
        args.target_version
    );

    let remote = forge.remote_config();
    let prefixes = &config.classifier.non_core_prefixes;

    for commit in commits.iter() {
        let (link, uncategorized) =
            match extract_issue_reference(&commit.subject) {
                Some(number) => {
                    let (issue, category) =
                        classify_reference(forge, number, &config.changelog)
                            .await?;
                    (issue.html_url, category.is_default())
                }
                None => (remote.commit_link(&commit.id), true),
            };

        // categorized items only matter when listing non-core ones
        if !uncategorized && !args.show_skipped {
            continue;
        }

        let files = vcs.files_touched(&commit.id)?;
        let core = is_core_commit(&files, prefixes);

        if core && uncategorized {
            writeln!(out, "{}: {link}", commit.subject)?;
        } else if !core && args.show_skipped {
            writeln!(out, "{SKIPPED_PREFIX}{}: {link}", commit.subject)?;
        } else {
            debug!("{} needs no categorization", commit.id);
            continue;
        }

        if args.show_files {
            for file in files.iter() {
                writeln!(out, "    {file}")?;
            }
        }

        out.flush()?;
    }

    Ok(())
}
