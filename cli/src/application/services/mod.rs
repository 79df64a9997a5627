//! Application services — one module per use-case.

pub mod install;
pub mod listing;
pub mod remove;
pub mod status;
