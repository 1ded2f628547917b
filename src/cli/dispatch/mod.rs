//! Maps validated CLI arguments to the action the binary runs.

use crate::cli::{
    actions::{Action, server::Args},
    commands::{ARG_ASSETS_DIR, ARG_PORT},
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if a required argument is missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let assets_dir = matches
        .get_one::<PathBuf>(ARG_ASSETS_DIR)
        .cloned()
        .context("missing required argument: --assets-dir")?;

    Ok(Action::Server(Args { port, assets_dir }))
}
