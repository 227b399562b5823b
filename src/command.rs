//! Subcommand implementations.
//!
//! Each reporter receives its collaborators explicitly: a [`Vcs`] for local
//! history, a [`Forge`] for tracker data, the loaded [`Config`] and a writer
//! for report output. Reports go to the writer, logs and progress to stderr.
//!
//! [`Vcs`]: crate::repo::Vcs
//! [`Forge`]: crate::forge::traits::Forge
//! [`Config`]: crate::config::Config

/// Release API client policy check.
pub mod api_clients_policy;

/// Categorized changelog generation.
pub mod changelog;

/// Shared functionality across commands.
pub mod common;

/// Milestone vs branch comparison.
pub mod compare;

/// Listing of core changes missing a category label.
pub mod needs_categorization;
