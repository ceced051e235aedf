// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message compliance checks.
//!
//! Each commit is split into title, blank second line, and body, and each part
//! is validated independently. A failing rule records an event and checking
//! continues with the remaining rules and commits.

use lazy_static::lazy_static;
use regex::Regex;
use std::io::Write;

use crate::commit::{split_message, Commit};
use crate::config::CheckConfig;
use crate::report::{Reporter, Severity};
use crate::tree::{
    check_path, find_directory_name, find_submodule_name, find_toplevel_file, ModuleTree,
};

lazy_static! {
    /// Required subject shape: a capitalized, optionally hyphenated first word
    /// (or the literal "Don't"), further text, no trailing period.
    static ref TITLE_TEXT_RE: Regex =
        Regex::new(r"^([A-Z][a-z]*(-[a-z]+)*|Don't) .*[^.]$").unwrap();

    /// Body lines exempt from the length limit: co-author trailers and bare or
    /// bracket-numbered URLs.
    static ref BODY_IGNORE_RE: Regex =
        Regex::new(r"^(Co-Authored-By:| *(\[[1-9][0-9]*\] )?https?://[^ ]*$)").unwrap();

    // Machine-generated titles exempt from all content checks.
    static ref REVERT_RE: Regex = Regex::new(r"^Revert ").unwrap();
    static ref AUTO_MERGE_RE: Regex =
        Regex::new(r"^Merge [0-9a-f]{40} into [0-9a-f]{40}$").unwrap();
    static ref PR_MERGE_RE: Regex = Regex::new(r"^Merge pull request").unwrap();

    /// Comma-separated module prefix, optional space after the comma.
    static ref MODULE_SPLIT_RE: Regex = Regex::new(r", ?").unwrap();
}

/// Validates commit messages and accumulates results in a [`Reporter`].
pub struct Checker<'a, W: Write> {
    config: &'a CheckConfig,
    reporter: Reporter<W>,
}

impl<'a, W: Write> Checker<'a, W> {
    /// Create a checker writing events to the given reporter.
    pub fn new(config: &'a CheckConfig, reporter: Reporter<W>) -> Self {
        Self { config, reporter }
    }

    /// Whether any commit checked so far recorded an error.
    pub fn has_error(&self) -> bool {
        self.reporter.has_error()
    }

    /// Consume the checker and return the reporter (used by tests).
    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Validate one commit record.
    pub fn check_commit<T: ModuleTree>(&mut self, commit: &Commit<T>, submodules: &[String]) {
        self.check_message(&commit.sha, &commit.message, &commit.tree, submodules);
    }

    /// Validate a commit message against the tree snapshot at that commit.
    pub fn check_message<T: ModuleTree>(
        &mut self,
        sha: &str,
        message: &str,
        tree: &T,
        submodules: &[String],
    ) {
        let parts = split_message(message);

        self.reporter.log(
            Severity::Info,
            sha,
            &format!("Checking commit '{}'", parts.title),
        );

        if message.is_empty() {
            self.reporter
                .log(Severity::Error, sha, "Commit message is empty.");
            return;
        }

        if REVERT_RE.is_match(parts.title)
            || AUTO_MERGE_RE.is_match(parts.title)
            || PR_MERGE_RE.is_match(parts.title)
        {
            return;
        }

        self.check_title(sha, parts.title, tree, submodules);

        if let Some(second) = parts.second {
            if !second.is_empty() {
                self.reporter
                    .log(Severity::Error, sha, "2nd line is not empty.");
            }
        }

        if let Some(body) = parts.body {
            self.check_body(sha, body);
        }
    }

    fn check_title<T: ModuleTree>(
        &mut self,
        sha: &str,
        title: &str,
        tree: &T,
        submodules: &[String],
    ) {
        let subject = match title.split_once(": ") {
            Some((prefix, rest)) => {
                let names: Vec<&str> = MODULE_SPLIT_RE.split(prefix).collect();
                self.check_module_names(sha, &names, tree, submodules);
                rest
            }
            None => title,
        };

        let limits = &self.config.limits;
        let title_len = title.chars().count();
        let subject_len = subject.chars().count();

        if title_len > limits.title {
            self.reporter.log(
                Severity::Error,
                sha,
                &format!(
                    "Too long title, {} characters, limit {}:\n  {}",
                    title_len, limits.title, title
                ),
            );
        } else if subject_len > limits.subject {
            self.reporter.log(
                Severity::Warning,
                sha,
                &format!(
                    "Too long title excluding module prefix, {} characters, recommended {}:\n  {}",
                    subject_len, limits.subject, subject
                ),
            );
        }

        if !TITLE_TEXT_RE.is_match(subject) {
            self.reporter.log(
                Severity::Error,
                sha,
                &format!("Invalid title text:\n  {}", subject),
            );
        }
    }

    /// Resolve the module-name tokens of a title prefix against the tree.
    ///
    /// Resolution succeeds as soon as any token matches; a total miss emits
    /// one error naming the last token examined.
    fn check_module_names<T: ModuleTree>(
        &mut self,
        sha: &str,
        names: &[&str],
        tree: &T,
        submodules: &[String],
    ) {
        let depth = self.config.limits.module_search_depth;
        let mut last = "";
        for &name in names {
            last = name;
            if name.contains('/') {
                if check_path(name, tree) {
                    return;
                }
            } else {
                if find_directory_name(name, tree, depth) {
                    return;
                }
                if find_toplevel_file(name, tree) {
                    return;
                }
                // TODO: removed submodules are invisible here; parsing the
                // .gitmodules blob at the commit would cover them.
                if find_submodule_name(name, submodules) {
                    return;
                }
            }
        }
        self.reporter.log(
            Severity::Error,
            sha,
            &format!("unknown module name '{}'", last),
        );
    }

    fn check_body(&mut self, sha: &str, body: &str) {
        let limit = self.config.limits.body_line;
        for line in body.split('\n') {
            if BODY_IGNORE_RE.is_match(line) {
                continue;
            }
            let len = line.chars().count();
            // A long single token (an index at most 0 means no breakable
            // space) is exempt; only lines that could wrap are flagged.
            if len > limit && line.find(' ').map_or(false, |i| i > 0) {
                self.reporter.log(
                    Severity::Error,
                    sha,
                    &format!(
                        "Too long description in a line, {} characters, limit {}:\n  {}",
                        len, limit, line
                    ),
                );
            }
        }
    }
}
