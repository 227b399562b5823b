//! Common functionality shared between commands.
use color_eyre::eyre;
use log::*;
use std::{collections::HashSet, io, path::Path};
use tokio::fs;

use crate::{
    analyzer::{
        category::{Category, resolve_category},
        reference::documented_issue_numbers,
    },
    config::ChangelogConfig,
    forge::{traits::Forge, types::Issue},
    result::Result,
};

/// Commit counter drawn on stderr. Report output is never interleaved with
/// it since reports go to their own writer.
pub struct Progress {
    total: usize,
    current: usize,
    enabled: bool,
}

impl Progress {
    pub fn new(total: usize, enabled: bool) -> Self {
        Self {
            total,
            current: 0,
            enabled,
        }
    }

    /// Count one processed commit.
    pub fn tick(&mut self) {
        self.current += 1;
        if self.enabled {
            eprint!("\rprocessed {}/{} commits", self.current, self.total);
        }
    }

    /// Terminate the counter line.
    pub fn finish(&self) {
        if self.enabled && self.current > 0 {
            eprintln!();
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }
}

/// Issue numbers already documented in the release notes file. A missing
/// file is an error when `required`, otherwise it is reported and treated
/// as documenting nothing.
pub async fn load_documented_issues(
    path: &Path,
    required: bool,
) -> Result<HashSet<u64>> {
    match fs::read_to_string(path).await {
        Ok(content) => {
            let numbers = documented_issue_numbers(&content);
            debug!(
                "{} issues already documented in {}",
                numbers.len(),
                path.display()
            );
            Ok(numbers)
        }
        Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
            warn!(
                "release notes not found at {}: no entries will be skipped",
                path.display()
            );
            Ok(HashSet::new())
        }
        Err(err) => Err(eyre::Report::new(err).wrap_err(format!(
            "failed to read release notes at {}",
            path.display()
        ))),
    }
}

/// Fetch the referenced issue and resolve its changelog category. Labels
/// only count for pull requests, plain issues file under the default
/// section.
pub async fn classify_reference(
    forge: &dyn Forge,
    number: u64,
    config: &ChangelogConfig,
) -> Result<(Issue, Category)> {
    let issue = forge.get_issue(number).await?;

    let category = if issue.is_pull_request {
        resolve_category(&issue.labels, config)
    } else {
        Category::Default
    };

    debug!("#{number} classified as {category:?}");

    Ok((issue, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{forge::traits::MockForge, test_helpers::*};
    use mockall::predicate::eq;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test_log::test(tokio::test)]
    async fn missing_release_notes_yield_empty_set() {
        let dir = TempDir::new().unwrap();

        let numbers =
            load_documented_issues(&dir.path().join("RELEASE_NOTES.rst"), false)
                .await
                .unwrap();

        assert!(numbers.is_empty());
    }

    #[tokio::test]
    async fn missing_required_release_notes_is_an_error() {
        let dir = TempDir::new().unwrap();

        let result =
            load_documented_issues(&dir.path().join("NOTES.rst"), true).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn reads_documented_numbers_from_release_notes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("RELEASE_NOTES.rst");
        std_fs::write(
            &path,
            "Bug Fixes\n\"\"\"\"\"\"\"\"\"\n- Fix dag parsing (#123)\n\
             - Mention of (#999) mid line\n- Improve UI (#456)   \n",
        )
        .unwrap();

        let numbers = load_documented_issues(&path, true).await.unwrap();

        assert_eq!(numbers, HashSet::from([123, 456]));
    }

    #[tokio::test]
    async fn issue_labels_are_ignored() {
        let mut forge = MockForge::new();
        forge
            .expect_get_issue()
            .with(eq(7))
            .returning(|n| Ok(create_test_issue(n, &["type:bug"], false)));

        let (issue, category) =
            classify_reference(&forge, 7, &ChangelogConfig::default())
                .await
                .unwrap();

        assert_eq!(issue.number, 7);
        assert_eq!(category, Category::Default);
    }

    #[tokio::test]
    async fn pull_request_labels_decide_category() {
        let mut forge = MockForge::new();
        forge
            .expect_get_issue()
            .returning(|n| Ok(create_test_issue(n, &["type:bug"], true)));

        let (_, category) =
            classify_reference(&forge, 8, &ChangelogConfig::default())
                .await
                .unwrap();

        assert_eq!(category, Category::Labeled("bug".into()));
    }

    #[test]
    fn disabled_progress_still_counts() {
        let mut progress = Progress::new(3, false);
        progress.tick();
        progress.tick();
        progress.finish();
        assert_eq!(progress.current(), 2);
    }
}
