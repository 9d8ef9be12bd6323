//! Implementation of the `diffscan scan` command.

use super::render::write_annotations;
use crate::cli::ScanArgs;
use diffscan::config::Config;
use diffscan::context::{BuildContext, RootDirContext};
use diffscan::error::{DiffScanError, Result};
use diffscan::scan::{CancelToken, ScanStats, UnifiedDiffParser};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Execute the `diffscan scan` command.
///
/// Annotations found before a cancellation are still printed; the command
/// then fails with the cancellation error.
pub fn cmd_scan(args: ScanArgs) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        DiffScanError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let format = args.format.unwrap_or(config.format);

    let ctx = match &args.root {
        Some(dir) => Some(RootDirContext::resolve_from(dir)?),
        None => None,
    };

    let input = read_input(args.input_path().map(|p| p.as_path()))?;

    // Registered after reading so Ctrl-C still interrupts a blocked stdin read.
    let cancel = CancelToken::new();
    cancel.cancel_on_signals()?;

    let mut parser = UnifiedDiffParser::from_config(&config)?;
    let mut annotations = Vec::new();
    let outcome = parser.scan_into(input.lines(), &cancel, &mut annotations);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_annotations(
        &mut out,
        &annotations,
        format,
        ctx.as_ref().map(|c| c as &dyn BuildContext),
    )?;

    finish(outcome, &cancel, annotations.len())
}

/// A signal that lands after the last line still fails the run.
fn finish(outcome: Result<ScanStats>, cancel: &CancelToken, emitted: usize) -> Result<()> {
    let stats = outcome?;
    if cancel.is_canceled() {
        return Err(DiffScanError::ScanCanceled {
            line: stats.lines + 1,
            emitted,
        });
    }
    Ok(())
}

/// Read the whole diff from `path`, or from stdin when `path` is `None`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            DiffScanError::UserError(format!(
                "failed to read diff file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| DiffScanError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(input)
        }
    }
}
