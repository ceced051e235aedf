// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use git2::Repository as Git2Repo;
use std::path::Path;

use crate::commit::Commit;
use crate::error::{GitError, LogcheckError, Result};
use crate::tree::GitTree;

/// Wrapper around git2::Repository with the queries the checker needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            LogcheckError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository discovered from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LogcheckError::Git(GitError::NotARepository)
            } else {
                LogcheckError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Collect the commits selected by a revision range (e.g. `origin/master..`).
    ///
    /// A lone revision walks that commit and all of its ancestors, matching
    /// `git log <rev>`.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<Commit<GitTree<'_>>>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| {
            LogcheckError::Git(GitError::OperationFailed {
                operation: "revwalk".to_string(),
                message: e.message().to_string(),
            })
        })?;

        if range.contains("..") {
            revwalk.push_range(range).map_err(|e| {
                LogcheckError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", range, e.message()),
                })
            })?;
        } else {
            let object = self.inner.revparse_single(range).map_err(|e| {
                LogcheckError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", range, e.message()),
                })
            })?;
            revwalk.push(object.id()).map_err(|e| {
                LogcheckError::Git(GitError::OperationFailed {
                    operation: "revwalk.push".to_string(),
                    message: e.message().to_string(),
                })
            })?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| {
                LogcheckError::Git(GitError::OperationFailed {
                    operation: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                LogcheckError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            let tree = commit.tree().map_err(|e| {
                LogcheckError::Git(GitError::OperationFailed {
                    operation: "commit.tree".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            commits.push(Commit::new(
                oid.to_string(),
                commit.message().unwrap_or("").to_string(),
                GitTree::new(&self.inner, tree),
            ));
        }

        Ok(commits)
    }

    /// Get the tree at HEAD.
    pub fn head_tree(&self) -> Result<GitTree<'_>> {
        let head = self.inner.head().map_err(|e| {
            LogcheckError::Git(GitError::OperationFailed {
                operation: "head".to_string(),
                message: e.message().to_string(),
            })
        })?;
        let tree = head.peel_to_tree().map_err(|e| {
            LogcheckError::Git(GitError::OperationFailed {
                operation: "head.peel_to_tree".to_string(),
                message: e.message().to_string(),
            })
        })?;
        Ok(GitTree::new(&self.inner, tree))
    }

    /// Get the submodule names registered in the working tree.
    pub fn submodule_names(&self) -> Result<Vec<String>> {
        let submodules = self.inner.submodules().map_err(|e| {
            LogcheckError::Git(GitError::OperationFailed {
                operation: "submodules".to_string(),
                message: e.message().to_string(),
            })
        })?;

        Ok(submodules
            .iter()
            .map(|s| match s.name() {
                Some(name) => name.to_string(),
                None => s.path().to_string_lossy().into_owned(),
            })
            .collect())
    }
}
