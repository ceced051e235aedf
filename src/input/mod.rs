// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! JSON commit-list input.
//!
//! Adapts the GitHub REST commit payload shape (`sha`, `commit.message`), as
//! produced by e.g. `gh api repos/OWNER/REPO/pulls/123/commits`.

use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};

use crate::error::{InputError, LogcheckError, Result};

/// One commit from a GitHub REST commit list.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: ApiCommitDetail,
}

/// The nested `commit` object of the REST payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommitDetail {
    pub message: String,
}

/// Read a commit list from a file, or from stdin when `path` is `-`.
pub fn read_commit_list(path: &str) -> Result<Vec<ApiCommit>> {
    let mut content = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut content).map_err(|e| {
            LogcheckError::Input(InputError::ReadFailed {
                path: path.to_string(),
                message: e.to_string(),
            })
        })?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut content))
            .map_err(|e| {
                LogcheckError::Input(InputError::ReadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                })
            })?;
    }
    parse_commit_list(&content)
}

/// Parse a commit list from a JSON string.
pub fn parse_commit_list(content: &str) -> Result<Vec<ApiCommit>> {
    serde_json::from_str(content).map_err(|e| {
        LogcheckError::Input(InputError::ParseFailed {
            message: e.to_string(),
        })
    })
}
