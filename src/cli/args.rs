// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

const HELP_EPILOG: &str = "\
examples:
  Check commit messages taken from GitHub REST API:
    gh api repos/OWNER/REPO/pulls/123/commits > commits.json
    logcheck -j commits.json
  Check commit messages from git log:
    logcheck -c origin/master..
";

/// Commit log message compliance checker.
///
/// Validates commit titles and bodies against the project conventions and
/// exits non-zero when any commit violates them.
#[derive(Parser, Debug)]
#[command(name = "logcheck")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit log message compliance checker", long_about = None)]
#[command(after_help = HELP_EPILOG)]
pub struct Cli {
    /// Revision range to check (e.g. "origin/master..")
    #[arg(short, long, value_name = "RANGE")]
    pub commits: Option<String>,

    /// JSON commit list to check ('-' reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub json: Option<String>,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Repository to inspect
    #[arg(short = 'C', long, default_value = ".", value_name = "PATH")]
    pub repo: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Net verbosity shift applied to the reporter threshold.
    pub fn verbosity(&self) -> i32 {
        i32::from(self.verbose) - i32::from(self.quiet)
    }
}
