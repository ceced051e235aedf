// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pure module-name lookups over a [`ModuleTree`].

use super::ModuleTree;

/// Search for a directory called `name` within `max_depth` levels of `tree`.
///
/// A depth of 1 only inspects the immediate subtrees.
pub fn find_directory_name<T: ModuleTree>(name: &str, tree: &T, max_depth: u32) -> bool {
    let subtrees = tree.subtrees();
    if subtrees.iter().any(|(n, _)| n == name) {
        return true;
    }
    if max_depth > 1 {
        for (_, subtree) in &subtrees {
            if find_directory_name(name, subtree, max_depth - 1) {
                return true;
            }
        }
    }
    false
}

/// Walk `path` segment by segment from the tree root.
///
/// Every interior segment must name a directory; the final segment must be a
/// directory too, so a path to a plain file does not resolve.
pub fn check_path<T: ModuleTree>(path: &str, tree: &T) -> bool {
    match path.split_once('/') {
        None => find_directory_name(path, tree, 1),
        Some((name, rest)) => {
            for (n, subtree) in tree.subtrees() {
                if n == name {
                    return check_path(rest, &subtree);
                }
            }
            false
        }
    }
}

/// Match `name` against the base names of the files at the tree root.
///
/// A leading dot is stripped, then everything from the first remaining dot,
/// so both `.gitignore` and `CMakeLists.txt` match their bare names.
pub fn find_toplevel_file<T: ModuleTree>(name: &str, tree: &T) -> bool {
    tree.file_names()
        .iter()
        .any(|file| file_base_name(file) == name)
}

/// Match `name` against the leaf (last path segment) of each submodule path.
pub fn find_submodule_name(name: &str, submodules: &[String]) -> bool {
    submodules
        .iter()
        .any(|path| path.rsplit('/').next() == Some(name))
}

fn file_base_name(name: &str) -> &str {
    let stripped = name.strip_prefix('.').unwrap_or(name);
    stripped.split('.').next().unwrap_or(stripped)
}
