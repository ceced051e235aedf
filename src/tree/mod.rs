// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Read-only source-tree abstraction.
//!
//! Module-name resolution only needs named subtrees and top-level file names,
//! so the lookups operate over [`ModuleTree`] rather than any particular
//! version-control library's tree object.

mod lookup;

pub use lookup::{check_path, find_directory_name, find_submodule_name, find_toplevel_file};

use git2::{ObjectType, Repository as Git2Repo, Tree};

/// A read-only view of one directory level of a source tree.
pub trait ModuleTree: Sized {
    /// Named subtrees (directories) directly under this node.
    fn subtrees(&self) -> Vec<(String, Self)>;

    /// File names directly under this node.
    fn file_names(&self) -> Vec<String>;
}

/// [`ModuleTree`] over a `git2` tree object.
pub struct GitTree<'repo> {
    repo: &'repo Git2Repo,
    tree: Tree<'repo>,
}

impl<'repo> GitTree<'repo> {
    /// Wrap a `git2` tree.
    pub fn new(repo: &'repo Git2Repo, tree: Tree<'repo>) -> Self {
        Self { repo, tree }
    }
}

impl ModuleTree for GitTree<'_> {
    fn subtrees(&self) -> Vec<(String, Self)> {
        self.tree
            .iter()
            .filter(|entry| entry.kind() == Some(ObjectType::Tree))
            .filter_map(|entry| {
                let name = entry.name()?.to_string();
                let object = entry.to_object(self.repo).ok()?;
                let tree = object.into_tree().ok()?;
                Some((name, GitTree::new(self.repo, tree)))
            })
            .collect()
    }

    fn file_names(&self) -> Vec<String> {
        self.tree
            .iter()
            .filter(|entry| entry.kind() == Some(ObjectType::Blob))
            .filter_map(|entry| entry.name().map(str::to_string))
            .collect()
    }
}

/// In-memory [`ModuleTree`], for adapting non-git tree shapes and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemTree {
    dirs: Vec<(String, MemTree)>,
    files: Vec<String>,
}

impl MemTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named subtree.
    pub fn dir(mut self, name: impl Into<String>, tree: MemTree) -> Self {
        self.dirs.push((name.into(), tree));
        self
    }

    /// Add a file name.
    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }
}

impl ModuleTree for MemTree {
    fn subtrees(&self) -> Vec<(String, Self)> {
        self.dirs.clone()
    }

    fn file_names(&self) -> Vec<String> {
        self.files.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_tree_builder() {
        let tree = MemTree::new()
            .dir("UI", MemTree::new().file("main.cpp"))
            .file("README.md");

        let subtrees = tree.subtrees();
        assert_eq!(subtrees.len(), 1);
        assert_eq!(subtrees[0].0, "UI");
        assert_eq!(subtrees[0].1.file_names(), vec!["main.cpp"]);
        assert_eq!(tree.file_names(), vec!["README.md"]);
    }
}
