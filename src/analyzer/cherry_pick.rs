use log::*;

use crate::{
    analyzer::reference::{grep_pattern, subject_references_issue},
    forge::{traits::Forge, types::Issue},
    repo::{GrepRequest, Vcs},
    result::Result,
};

/// Whether a commit squash-merged from `number` exists on the current
/// branch, optionally only after `since`.
///
/// `--grep` matches any message line, so each returned subject is checked
/// again for the exact `(#<number>)` suffix.
pub fn is_cherry_picked(
    vcs: &dyn Vcs,
    number: u64,
    since: Option<&str>,
) -> Result<bool> {
    let lines = vcs.grep_subjects(GrepRequest {
        pattern: grep_pattern(number),
        reference: None,
        since: since.map(String::from),
    })?;

    let found = lines
        .iter()
        .any(|line| subject_references_issue(&line.subject, number));

    debug!("#{number} on branch: {found}");

    Ok(found)
}

/// The commit on `main_ref` a pull request was merged as.
///
/// Searches commit subjects first. Only when the search returns nothing at
/// all does it fall back to the tracker's merge metadata. Plain issues have
/// no associated commit.
pub async fn associated_commit(
    vcs: &dyn Vcs,
    forge: &dyn Forge,
    issue: &Issue,
    main_ref: &str,
) -> Result<Option<String>> {
    if !issue.is_pull_request {
        return Ok(None);
    }

    let lines = vcs.grep_subjects(GrepRequest {
        pattern: grep_pattern(issue.number),
        reference: Some(main_ref.to_string()),
        since: None,
    })?;

    if !lines.is_empty() {
        return Ok(lines
            .into_iter()
            .find(|line| subject_references_issue(&line.subject, issue.number))
            .map(|line| line.id));
    }

    debug!(
        "no commit found on {main_ref} for #{}: checking merge status",
        issue.number
    );

    let status = forge.get_pull_request_status(issue.number).await?;

    if status.merged {
        return Ok(status.merge_commit_sha);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        forge::{traits::MockForge, types::PullRequestStatus},
        repo::{MockVcs, SubjectLine},
        test_helpers::*,
    };
    use mockall::predicate::eq;

    fn line(id: &str, subject: &str) -> SubjectLine {
        SubjectLine {
            id: id.into(),
            subject: subject.into(),
        }
    }

    #[test]
    fn requires_exact_suffix_match() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects()
            .returning(|_| Ok(vec![line("aaa", "Some change (#123)")]));

        assert!(!is_cherry_picked(&vcs, 12, None).unwrap());
    }

    #[test]
    fn finds_exact_match_on_branch() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects()
            .with(eq(GrepRequest {
                pattern: "(#123)$".into(),
                reference: None,
                since: Some("2.9.0".into()),
            }))
            .returning(|_| {
                Ok(vec![
                    line("aaa", "Other change (#1123)"),
                    line("bbb", "Some change (#123)"),
                ])
            });

        assert!(is_cherry_picked(&vcs, 123, Some("2.9.0")).unwrap());
    }

    #[test]
    fn empty_log_is_not_cherry_picked() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects().returning(|_| Ok(vec![]));

        assert!(!is_cherry_picked(&vcs, 5, None).unwrap());
    }

    #[test]
    fn propagates_git_failures() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects()
            .returning(|_| Err(color_eyre::eyre::eyre!("bad revision")));

        assert!(is_cherry_picked(&vcs, 5, Some("nope")).is_err());
    }

    #[tokio::test]
    async fn associated_commit_prefers_log_match() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects()
            .with(eq(GrepRequest {
                pattern: "(#42)$".into(),
                reference: Some("origin/main".into()),
                since: None,
            }))
            .returning(|_| Ok(vec![line("abc1234", "Add thing (#42)")]));
        let mut forge = MockForge::new();
        forge.expect_get_pull_request_status().never();

        let issue = create_test_issue(42, &[], true);
        let commit = associated_commit(&vcs, &forge, &issue, "origin/main")
            .await
            .unwrap();

        assert_eq!(commit.as_deref(), Some("abc1234"));
    }

    #[tokio::test]
    async fn associated_commit_does_not_fall_back_when_log_has_lines() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects().returning(|_| {
            Ok(vec![line("abc1234", "Revert \"Add thing (#42)\"")])
        });
        let mut forge = MockForge::new();
        forge.expect_get_pull_request_status().never();

        let issue = create_test_issue(42, &[], true);
        let commit = associated_commit(&vcs, &forge, &issue, "origin/main")
            .await
            .unwrap();

        assert!(commit.is_none());
    }

    #[tokio::test]
    async fn associated_commit_falls_back_to_merge_commit() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects().returning(|_| Ok(vec![]));
        let mut forge = MockForge::new();
        forge
            .expect_get_pull_request_status()
            .with(eq(42))
            .returning(|_| {
                Ok(PullRequestStatus {
                    merged: true,
                    merge_commit_sha: Some("feedbeef".into()),
                })
            });

        let issue = create_test_issue(42, &[], true);
        let commit = associated_commit(&vcs, &forge, &issue, "origin/main")
            .await
            .unwrap();

        assert_eq!(commit.as_deref(), Some("feedbeef"));
    }

    #[tokio::test]
    async fn unmerged_pull_request_has_no_commit() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects().returning(|_| Ok(vec![]));
        let mut forge = MockForge::new();
        forge
            .expect_get_pull_request_status()
            .returning(|_| Ok(PullRequestStatus::default()));

        let issue = create_test_issue(42, &[], true);
        let commit = associated_commit(&vcs, &forge, &issue, "origin/main")
            .await
            .unwrap();

        assert!(commit.is_none());
    }

    #[tokio::test]
    async fn plain_issues_have_no_commit() {
        let mut vcs = MockVcs::new();
        vcs.expect_grep_subjects().never();
        let forge = MockForge::new();

        let issue = create_test_issue(42, &[], false);
        let commit = associated_commit(&vcs, &forge, &issue, "origin/main")
            .await
            .unwrap();

        assert!(commit.is_none());
    }
}
