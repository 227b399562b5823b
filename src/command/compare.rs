//! Compares a release milestone against the current branch.
//!
//! Every pull request and issue in the milestone is printed as one
//! fixed-width row telling whether it was already cherry-picked, how it
//! would be categorized and which commit on the main ref it corresponds to.
use log::*;
use std::{fmt::Display, io::Write};

use crate::{
    analyzer::{
        category::resolve_category,
        cherry_pick::{associated_commit, is_cherry_picked},
    },
    cli::CompareArgs,
    config::Config,
    forge::{
        traits::Forge,
        types::{Issue, IssueKind, IssueState, MilestoneSearchRequest},
    },
    repo::Vcs,
    result::Result,
};

const ISSUE_TYPE: &str = "Issue";

fn format_row(
    number: impl Display,
    kind: &str,
    state: impl Display,
    title: &str,
    merged: impl Display,
    commit: &str,
) -> String {
    format!(
        "{number:<8}|{kind:<15}|{state:<10}|{title:<83.83}|{merged:<6}|{commit:>9.7}"
    )
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    on_branch: usize,
    closed_not_on_branch: usize,
    open_not_on_branch: usize,
}

impl Tally {
    fn record(&mut self, issue: &Issue, merged: bool) {
        if merged {
            self.on_branch += 1;
            return;
        }

        if !issue.is_pull_request {
            return;
        }

        match issue.state {
            IssueState::Closed => self.closed_not_on_branch += 1,
            IssueState::Open => self.open_not_on_branch += 1,
        }
    }
}

async fn milestone_items(
    forge: &dyn Forge,
    milestone: &str,
) -> Result<Vec<Issue>> {
    let mut items = vec![];

    for kind in [IssueKind::PullRequest, IssueKind::Issue] {
        let found = forge
            .search_milestone(MilestoneSearchRequest {
                milestone: milestone.to_string(),
                kind,
            })
            .await?;
        items.extend(found);
    }

    items.sort_by_key(|item| std::cmp::Reverse(item.sort_timestamp()));

    Ok(items)
}

/// Print the milestone table followed by a one line summary.
pub async fn execute<W: Write>(
    vcs: &dyn Vcs,
    forge: &dyn Forge,
    config: &Config,
    args: &CompareArgs,
    out: &mut W,
) -> Result<()> {
    let milestone = config.compare.milestone(&args.target_version);
    let items = milestone_items(forge, &milestone).await?;

    info!("comparing {} items in milestone {milestone}", items.len());

    writeln!(
        out,
        "{}",
        format_row(
            "ISSUE",
            "TYPE/PR",
            "STATUS",
            "DESCRIPTION",
            "MERGED",
            "COMMIT"
        )
    )?;

    let mut tally = Tally::default();

    for item in items.iter() {
        let merged = is_cherry_picked(
            vcs,
            item.number,
            args.previous_version.as_deref(),
        )?;

        tally.record(item, merged);

        if args.unmerged && merged {
            continue;
        }

        let category = resolve_category(&item.labels, &config.changelog);
        let kind = if item.is_pull_request {
            category.section_name(&config.changelog)
        } else {
            ISSUE_TYPE
        };

        let commit =
            associated_commit(vcs, forge, item, &config.compare.main_ref)
                .await?
                .unwrap_or_default();

        writeln!(
            out,
            "{}",
            format_row(
                item.number,
                kind,
                item.state,
                &item.title,
                merged,
                &commit
            )
        )?;
        out.flush()?;
    }

    writeln!(
        out,
        "Commits on branch: {}, PRs not on branch: {} closed, {} open",
        tally.on_branch, tally.closed_not_on_branch, tally.open_not_on_branch
    )?;

    Ok(())
}
