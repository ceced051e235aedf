// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::config::CheckConfig;
use crate::error::Result;
use crate::git::Repository;
use crate::input;
use crate::report::Reporter;
use crate::rules::Checker;

use super::args::Cli;

/// Run the checker over the inputs selected on the command line.
///
/// Returns whether any error-severity violation was recorded; every commit is
/// checked before the caller decides the exit status.
pub fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => CheckConfig::load_from(path)?,
        None => CheckConfig::load()?,
    };

    let repo = Repository::open(&cli.repo)?;
    let submodules = repo.submodule_names()?;

    let mut checker = Checker::new(&config, Reporter::stdout(cli.verbosity()));

    if let Some(range) = &cli.commits {
        tracing::debug!("Checking revision range {}", range);
        for commit in repo.commits_in_range(range)? {
            checker.check_commit(&commit, &submodules);
        }
    }

    if let Some(path) = &cli.json {
        let list = input::read_commit_list(path)?;
        tracing::debug!("Checking {} commits from JSON list {}", list.len(), path);
        // JSON commits carry no tree of their own; the HEAD tree is the
        // closest available snapshot.
        let tree = repo.head_tree()?;
        for api_commit in &list {
            checker.check_message(&api_commit.sha, &api_commit.commit.message, &tree, &submodules);
        }
    }

    Ok(checker.has_error())
}
