// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! logcheck - Commit Log Message Compliance Checker
//!
//! A CI tool that validates commit titles and bodies against project
//! conventions.
//!
//! # Features
//!
//! - **Title checks**: length limits, `Module: Subject` shape, module-name
//!   resolution against the commit's source tree
//! - **Body checks**: per-line length limits with trailer/URL exemptions
//! - **Two input paths**: a git revision range or a GitHub REST commit list
//! - **CI-friendly**: one log line per violation, non-zero exit on errors
//!
//! # Example
//!
//! ```no_run
//! use logcheck::config::CheckConfig;
//! use logcheck::git::Repository;
//! use logcheck::report::Reporter;
//! use logcheck::rules::Checker;
//!
//! let config = CheckConfig::load().unwrap();
//! let repo = Repository::open_current().unwrap();
//! let submodules = repo.submodule_names().unwrap();
//!
//! let mut checker = Checker::new(&config, Reporter::stdout(0));
//! for commit in repo.commits_in_range("origin/master..").unwrap() {
//!     checker.check_commit(&commit, &submodules);
//! }
//! std::process::exit(if checker.has_error() { 1 } else { 0 });
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod input;
pub mod report;
pub mod rules;
pub mod tree;

// Re-exports for convenience
pub use config::CheckConfig;
pub use error::{LogcheckError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of logcheck.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
