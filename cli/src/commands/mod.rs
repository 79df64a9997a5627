//! Command implementations

pub mod info;
pub mod install;
pub mod list;
pub mod remove;
pub mod status;
pub mod update;

use crate::domain::{AssetError, TypeSelector};
use crate::output::OutputContext;

/// Parse a positional `TYPE`, reporting an invalid value to the user.
///
/// Returns `None` when the value was rejected; the caller stops without
/// failing the process.
pub(crate) fn parse_type(ctx: &OutputContext, raw: &str) -> Option<TypeSelector> {
    match raw.parse::<TypeSelector>() {
        Ok(selector) => Some(selector),
        Err(e) => {
            report_usage(ctx, &e);
            None
        }
    }
}

/// Print a usage error. Invalid types go to stderr with the list of valid
/// types; missing arguments are shown as a warning.
pub(crate) fn report_usage(ctx: &OutputContext, err: &AssetError) {
    match err {
        AssetError::InvalidType(_) => {
            let text = err.to_string();
            let mut lines = text.lines();
            if let Some(first) = lines.next() {
                ctx.error(first);
            }
            for line in lines {
                eprintln!("    {line}");
            }
        }
        _ => ctx.warn(&err.to_string()),
    }
}
