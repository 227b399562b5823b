//! Local git repository access.
//!
//! Commit listing and subject searches shell out to the `git` binary so the
//! output matches what a release manager sees on the command line. Touched
//! file lists are computed with `git2` by diffing a commit against its first
//! parent.
//!
//! # Usage
//!
//! ```rust,ignore
//! let repo = GitRepository::discover(Path::new("."))?;
//! let commits = repo.commits_in_range(LogRangeRequest {
//!     from: "2.9.0".into(),
//!     to: "2.9.1".into(),
//!     paths: vec![],
//! })?;
//! ```
use color_eyre::eyre::{OptionExt, WrapErr};
use git2::{DiffFindOptions, Oid, TreeWalkMode};
use log::*;
#[cfg(test)]
use mockall::automock;
use std::{
    path::{Path, PathBuf},
    process::Command,
};

pub mod record;

use crate::{
    error::CrossrefError,
    repo::record::{
        CommitRecord, FIELD_SEPARATOR, LOG_FORMAT, parse_log_output,
    },
    result::Result,
};

/// Commits in `from..to`, optionally limited to the given paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRangeRequest {
    pub from: String,
    pub to: String,
    pub paths: Vec<String>,
}

/// Commits whose message matches a `git log --grep` pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrepRequest {
    /// Basic regular expression handed to `--grep`.
    pub pattern: String,
    /// Ref to search instead of the current branch.
    pub reference: Option<String>,
    /// Only consider commits after this revision.
    pub since: Option<String>,
}

/// A commit id and subject returned by a subject search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectLine {
    pub id: String,
    pub subject: String,
}

/// Data retrieval primitives the reporters need from version control.
#[cfg_attr(test, automock)]
pub trait Vcs {
    /// List commits in the range, newest first as emitted by git.
    fn commits_in_range(
        &self,
        req: LogRangeRequest,
    ) -> Result<Vec<CommitRecord>>;
    /// List commits whose message matches the request pattern.
    fn grep_subjects(&self, req: GrepRequest) -> Result<Vec<SubjectLine>>;
    /// List the files touched by a commit. Renames are reported as
    /// `{old => new}`. Merge commits report no files.
    fn files_touched(&self, id: &str) -> Result<Vec<String>>;
}

/// Git repository located on disk.
pub struct GitRepository {
    workdir: PathBuf,
    repo: git2::Repository,
}

impl GitRepository {
    /// Locate the repository containing `path`, searching parent
    /// directories.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path)
            .wrap_err_with(|| {
                format!("no git repository found at {}", path.display())
            })?;

        let workdir = repo
            .workdir()
            .ok_or_eyre("Repository has no working directory")?
            .to_path_buf();

        debug!("using git repository at {}", workdir.display());

        Ok(Self { workdir, repo })
    }

    /// The repository's working directory.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn git(&self, args: &[String]) -> Result<String> {
        debug!("running: git {}", args.join(" "));

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .wrap_err("failed to execute git")?;

        if !output.status.success() {
            return Err(CrossrefError::GitCommand {
                args: args.join(" "),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr)
                    .trim()
                    .to_string(),
            }
            .into());
        }

        // subjects in a legacy encoding must not abort a whole report
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn collect_tree_files(
        &self,
        commit: &git2::Commit,
    ) -> Result<Vec<String>> {
        let mut files = vec![];

        commit
            .tree()?
            .walk(TreeWalkMode::PreOrder, |dir, entry| {
                if entry.kind() != Some(git2::ObjectType::Blob) {
                    return 0;
                }
                if let Some(name) = entry.name() {
                    files.push(format!("{dir}{name}"));
                }
                0
            })
            .wrap_err("failed to get the changed files of the first commit")?;

        Ok(files)
    }
}

impl Vcs for GitRepository {
    fn commits_in_range(
        &self,
        req: LogRangeRequest,
    ) -> Result<Vec<CommitRecord>> {
        let mut args = vec![
            "log".to_string(),
            format!("--format={LOG_FORMAT}"),
            format!("{}..{}", req.from, req.to),
        ];

        if !req.paths.is_empty() {
            args.push("--".into());
            args.extend(req.paths);
        }

        let output = self.git(&args)?;
        let records = parse_log_output(&output)?;

        debug!(
            "found {} commits in {}..{}",
            records.len(),
            req.from,
            req.to
        );

        Ok(records)
    }

    fn grep_subjects(&self, req: GrepRequest) -> Result<Vec<SubjectLine>> {
        let mut args = vec![
            "log".to_string(),
            "--format=%H%x1f%s".to_string(),
            // patterns are basic regexps whatever grep.patternType says
            "--basic-regexp".to_string(),
            format!("--grep={}", req.pattern),
        ];

        match (req.since, req.reference) {
            (Some(since), Some(reference)) => {
                args.push(format!("{since}..{reference}"))
            }
            (Some(since), None) => args.push(format!("{since}..")),
            (None, Some(reference)) => args.push(reference),
            (None, None) => {}
        }

        let output = self.git(&args)?;

        let lines = output
            .lines()
            .filter_map(|line| line.split_once(FIELD_SEPARATOR))
            .map(|(id, subject)| SubjectLine {
                id: id.to_string(),
                subject: subject.to_string(),
            })
            .collect::<Vec<SubjectLine>>();

        Ok(lines)
    }

    fn files_touched(&self, id: &str) -> Result<Vec<String>> {
        let commit = self.repo.find_commit(Oid::from_str(id)?)?;

        if commit.parent_count() > 1 {
            debug!("{id} is a merge commit: no direct file changes");
            return Ok(vec![]);
        }

        let Ok(parent) = commit.parent(0) else {
            return self.collect_tree_files(&commit);
        };

        let mut diff = self.repo.diff_tree_to_tree(
            Some(&parent.tree()?),
            Some(&commit.tree()?),
            None,
        )?;

        diff.find_similar(Some(DiffFindOptions::new().renames(true)))?;

        let files = diff
            .deltas()
            .filter_map(|delta| {
                let old = delta.old_file().path();
                let new = delta.new_file().path();
                match (delta.status(), old, new) {
                    (git2::Delta::Renamed, Some(old), Some(new)) => Some(
                        format!("{{{} => {}}}", old.display(), new.display()),
                    ),
                    _ => new.or(old).map(|p| p.to_string_lossy().into_owned()),
                }
            })
            .collect::<Vec<String>>();

        Ok(files)
    }
}
