//! Result type used throughout release-crossref.
//!
//! Every fallible operation returns `color_eyre::eyre::Result<T>` so failures
//! from git or the GitHub API bubble up to `main` with their full context
//! chain and terminate the command.
//!
//! # Usage
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! fn load_notes(path: &Path) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("failed to read release notes")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout release-crossref.
pub type Result<T> = EyreResult<T>;
