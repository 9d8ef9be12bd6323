//! Command implementations for diffscan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config_cmd;
mod render;
mod scan;

use crate::cli::Command;
use diffscan::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Scan(args) => scan::cmd_scan(args),
        Command::Config(args) => config_cmd::cmd_config(args),
    }
}
