//! Categorized changelog for a revision range.
use log::*;
use std::{collections::HashSet, io::Write, path::Path};

use crate::{
    analyzer::{
        core_files::is_core_commit, reference::extract_issue_reference,
        section::Sections,
    },
    cli::ChangelogArgs,
    command::common::{Progress, classify_reference, load_documented_issues},
    config::Config,
    forge::traits::Forge,
    repo::{LogRangeRequest, Vcs},
    result::Result,
};

/// Print the changelog for `previous_version..target_version`.
pub async fn execute<W: Write>(
    vcs: &dyn Vcs,
    forge: &dyn Forge,
    config: &Config,
    repo_root: &Path,
    args: &ChangelogArgs,
    out: &mut W,
) -> Result<()> {
    let release_notes =
        repo_root.join(config.changelog.release_notes_file());
    let documented = load_documented_issues(
        &release_notes,
        config.changelog.release_notes.is_some(),
    )
    .await?;

    let sections = build_sections(
        vcs,
        forge,
        config,
        &args.previous_version,
        &args.target_version,
        &documented,
        !args.disable_progress_bar,
    )
    .await?;

    write!(out, "{}", sections.render())?;
    out.flush()?;

    Ok(())
}

/// File every commit in the range under its changelog section.
///
/// Unlinked commits always land in the default section. Linked commits are
/// dropped when already documented or when they do not affect core.
pub async fn build_sections(
    vcs: &dyn Vcs,
    forge: &dyn Forge,
    config: &Config,
    previous: &str,
    target: &str,
    documented: &HashSet<u64>,
    show_progress: bool,
) -> Result<Sections> {
    let commits = vcs.commits_in_range(LogRangeRequest {
        from: previous.to_string(),
        to: target.to_string(),
        paths: vec![],
    })?;

    info!(
        "building changelog from {} commits in {previous}..{target}",
        commits.len()
    );

    let mut sections = Sections::new();
    let mut progress = Progress::new(commits.len(), show_progress);

    for commit in commits.iter() {
        progress.tick();

        let Some(number) = extract_issue_reference(&commit.subject) else {
            debug!("{} has no issue reference", commit.id);
            sections.push(&config.changelog.default_section, &commit.subject);
            continue;
        };

        if documented.contains(&number) {
            debug!("#{number} already in release notes: skipping");
            continue;
        }

        let (_, category) =
            classify_reference(forge, number, &config.changelog).await?;

        let files = vcs.files_touched(&commit.id)?;

        if !is_core_commit(&files, &config.classifier.non_core_prefixes) {
            debug!("#{number} does not affect core: skipping");
            continue;
        }

        sections.push(
            category.section_name(&config.changelog),
            commit.subject.as_str(),
        );
    }

    progress.finish();

    Ok(sections)
}
