//! Release manager tooling that cross-references git history with GitHub
//! issues and pull requests.
pub mod analyzer;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod repo;
pub mod result;

pub use cli::{Args, Command};
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
