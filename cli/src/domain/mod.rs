//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`. All functions are
//! synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod filter;
pub mod kind;

pub use config::{AppConfig, AssetPaths, GithubSource};
pub use error::AssetError;
pub use filter::{parse_filter, select};
pub use kind::{ItemKind, TypeSelector, VALID_TYPES};
