//! Configuration loading and parsing for `crossref.toml` files.
//!
//! Every field is optional. A missing file yields the defaults, which match
//! the conventions of the apache/airflow repository.
use log::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::result::Result;

/// Default configuration filename, looked up in the repository root.
pub const DEFAULT_CONFIG_FILE: &str = "crossref.toml";
/// Label prefix that carries the changelog category (e.g. "type:bug").
pub const DEFAULT_CATEGORY_LABEL_PREFIX: &str = "type:";
/// Label that removes a pull request from the changelog entirely.
pub const DEFAULT_SKIP_LABEL: &str = "changelog:skip";
/// Section for commits without a recognized category label.
pub const DEFAULT_SECTION_NAME: &str = "Uncategorized";
/// Section key used for skipped items. Never printed.
pub const SKIP_SECTION_NAME: &str = "(skip)";
/// Release notes document scanned for already documented issue numbers.
pub const DEFAULT_RELEASE_NOTES_FILE: &str = "RELEASE_NOTES.rst";
/// Milestone title template, `{version}` is replaced by the target version.
pub const DEFAULT_MILESTONE_TEMPLATE: &str = "Airflow {version}";
/// Ref searched when looking up the commit a PR was squash-merged as.
pub const DEFAULT_MAIN_REF: &str = "origin/main";
/// Generated API specification whose changes require client releases.
pub const DEFAULT_API_SPEC_FILE: &str = "airflow/api_connexion/openapi/v1.yaml";
/// Subject phrase of automated version bumps that touch the API spec.
pub const DEFAULT_VERSION_BUMP_PHRASE: &str = "update airflow version to";

/// Path prefixes that never affect core. Providers, docs, chart, CI and
/// tooling, tests and packaging metadata.
pub const DEFAULT_NON_CORE_PREFIXES: &[&str] = &[
    // Providers
    "airflow/providers/",
    "providers/",
    "tests/providers/",
    "tests/system/providers/",
    // Docs
    "docs/",
    "README.md",
    "CONTRIBUTING.rst",
    "INSTALL",
    "UPDATING.md",
    "RELEASE_NOTES.rst",
    "BREEZE.rst",
    // Chart
    "chart/",
    "helm_tests/",
    // CI and tooling
    ".github/",
    ".pre-commit-config.yaml",
    ".asf.yaml",
    "dev/",
    "scripts/",
    "images/",
    "Dockerfile",
    "Dockerfile.ci",
    "generated/",
    // Tests
    "tests/",
    "kubernetes_tests/",
    "docker_tests/",
    // Packaging
    "setup.py",
    "setup.cfg",
    "pyproject.toml",
    "hatch_build.py",
];

/// Changelog labelling conventions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Label prefix whose remainder names the changelog section.
    pub category_label_prefix: String,
    /// Label that drops a pull request from the changelog.
    pub skip_label: String,
    /// Section used when no category label is present.
    pub default_section: String,
    /// Release notes file, relative to the repository root. When set it
    /// must exist, otherwise `RELEASE_NOTES.rst` is read if present.
    pub release_notes: Option<String>,
}

impl ChangelogConfig {
    /// Configured release notes file, or the default one.
    pub fn release_notes_file(&self) -> &str {
        self.release_notes
            .as_deref()
            .unwrap_or(DEFAULT_RELEASE_NOTES_FILE)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            category_label_prefix: DEFAULT_CATEGORY_LABEL_PREFIX.into(),
            skip_label: DEFAULT_SKIP_LABEL.into(),
            default_section: DEFAULT_SECTION_NAME.into(),
            release_notes: None,
        }
    }
}

/// Core-affecting classification settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub non_core_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            non_core_prefixes: DEFAULT_NON_CORE_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Settings for the branch vs milestone comparison.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Milestone title template, `{version}` is substituted.
    pub milestone_template: String,
    /// Ref holding squash-merged pull requests.
    pub main_ref: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            milestone_template: DEFAULT_MILESTONE_TEMPLATE.into(),
            main_ref: DEFAULT_MAIN_REF.into(),
        }
    }
}

impl CompareConfig {
    /// Milestone title for the given target version.
    pub fn milestone(&self, version: &str) -> String {
        self.milestone_template.replace("{version}", version)
    }
}

/// Settings for the API client release policy check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiClientsConfig {
    /// Generated API specification document.
    pub spec_file: String,
    /// Case-insensitive subject phrase of automated version bumps.
    pub version_bump_phrase: String,
}

impl Default for ApiClientsConfig {
    fn default() -> Self {
        Self {
            spec_file: DEFAULT_API_SPEC_FILE.into(),
            version_bump_phrase: DEFAULT_VERSION_BUMP_PHRASE.into(),
        }
    }
}

/// Root configuration structure for `crossref.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub changelog: ChangelogConfig,
    pub classifier: ClassifierConfig,
    pub compare: CompareConfig,
    pub api_clients: ApiClientsConfig,
}

impl Config {
    /// Load configuration from an explicit path, or from `crossref.toml` in
    /// the repository root when present. An explicit path must exist.
    pub fn load(repo_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = repo_root.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    info!("no configuration found: using default");
                    return Ok(Config::default());
                }
                candidate
            }
        };

        debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
