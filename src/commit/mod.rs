// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit records and message splitting.

/// A commit under inspection, generic over the tree snapshot type.
#[derive(Debug)]
pub struct Commit<T> {
    /// Full commit hash (hex).
    pub sha: String,
    /// Full commit message.
    pub message: String,
    /// Tree snapshot at this commit.
    pub tree: T,
}

impl<T> Commit<T> {
    /// Create a new commit record.
    pub fn new(sha: impl Into<String>, message: impl Into<String>, tree: T) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
            tree,
        }
    }
}

/// The three logical parts of a commit message.
///
/// The title is the first line; the second line is expected to be blank and
/// separates the title from the body.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageParts<'a> {
    pub title: &'a str,
    pub second: Option<&'a str>,
    pub body: Option<&'a str>,
}

/// Split a message on the first two newlines into title, second line, body.
pub fn split_message(message: &str) -> MessageParts<'_> {
    let mut parts = message.splitn(3, '\n');
    MessageParts {
        title: parts.next().unwrap_or(""),
        second: parts.next(),
        body: parts.next(),
    }
}
