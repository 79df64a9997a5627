//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP access to the asset
//! repository, filesystem access, and logging setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod fs;
pub mod github;
pub mod logging;

pub use fs::LocalFs;
pub use github::GithubAssetSource;
