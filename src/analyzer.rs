//! Correlation and classification of commits against tracker issues.
//!
//! Everything in here operates on already fetched data or on the narrow
//! [`Vcs`](crate::repo::Vcs) and [`Forge`](crate::forge::traits::Forge)
//! primitives, so each rule can be tested in isolation.

/// API client release policy for a version pair.
pub mod api_clients;

/// Changelog category resolution from issue labels.
pub mod category;

/// Cherry-pick and merge status lookups.
pub mod cherry_pick;

/// Core-affecting classification of touched files.
pub mod core_files;

/// Issue reference extraction from commit subjects and release notes.
pub mod reference;

/// Ordered changelog sections.
pub mod section;
