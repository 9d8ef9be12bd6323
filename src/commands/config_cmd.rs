//! Implementation of the `diffscan config` command.
//!
//! Prints the configuration a `scan` in the current directory would use.

use crate::cli::ConfigArgs;
use diffscan::config::Config;
use diffscan::error::{DiffScanError, Result};
use std::env;
use std::path::Path;

/// Execute the `diffscan config` command.
pub fn cmd_config(args: ConfigArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        DiffScanError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    print!("{}", effective_config_yaml(args.config.as_deref(), &cwd)?);
    Ok(())
}

fn effective_config_yaml(explicit: Option<&Path>, dir: &Path) -> Result<String> {
    Config::discover(explicit, dir)?.to_yaml()
}
