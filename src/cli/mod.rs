//! CLI argument parsing for diffscan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use diffscan::config::OutputFormat;
use std::path::PathBuf;

/// Diffscan: streaming unified-diff scanner.
///
/// Every hunk header in a unified diff becomes a pair of annotations:
/// - an old-side record anchored to the pre-change file
/// - a new-side mirror anchored to the post-change file
#[derive(Parser, Debug)]
#[command(name = "diffscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffscan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a unified diff and print its annotations.
    ///
    /// Reads FILE, or standard input when FILE is omitted or `-`.
    /// Ctrl-C stops the scan; annotations found so far are still printed.
    Scan(ScanArgs),

    /// Print the effective configuration as YAML.
    Config(ConfigArgs),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Diff file to scan (`-` for standard input).
    pub file: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to .diffscan.yaml in the current directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Build root used to resolve each annotation's temp name.
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config file (defaults to .diffscan.yaml in the current directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ScanArgs {
    /// The input path, or `None` for standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
