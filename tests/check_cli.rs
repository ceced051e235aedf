// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the logcheck binary.

use assert_cmd::Command;
use git2::Repository as Git2Repo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Stage everything in the working tree and commit it with the given message.
fn commit_all(repo: &Git2Repo, message: &str) -> String {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("tester", "tester@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
    oid.to_string()
}

fn write_file(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A repo with one baseline commit containing a `UI` directory.
fn setup_repo() -> (TempDir, Git2Repo, String) {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();
    write_file(dir.path(), "UI/window-basic-main.cpp", "// ui\n");
    write_file(dir.path(), "CMakeLists.txt", "project(demo)\n");
    let base = commit_all(&repo, "Add project skeleton");
    (dir, repo, base)
}

fn logcheck() -> Command {
    Command::cargo_bin("logcheck").unwrap()
}

#[test]
fn range_with_compliant_commits_exits_zero() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/dialog.cpp", "// dialog\n");
    commit_all(&repo, "UI: Improve settings dialog layout");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn range_with_violations_exits_one_and_reports() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/dialog.cpp", "// dialog\n");
    commit_all(&repo, "foobar: Fix it.");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("unknown module name 'foobar'"))
        .stdout(predicate::str::contains("Invalid title text"));
}

#[test]
fn all_commits_in_range_are_checked() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/a.cpp", "// a\n");
    commit_all(&repo, "UI: bad lowercase subject");
    write_file(dir.path(), "UI/b.cpp", "// b\n");
    commit_all(&repo, "UI: Another subject ending wrong.");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad lowercase subject"))
        .stdout(predicate::str::contains("Another subject ending wrong."));
}

#[test]
fn revert_and_merge_titles_are_skipped() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/a.cpp", "// a\n");
    commit_all(&repo, "Revert \"foobar: not checked at all.\"");
    write_file(dir.path(), "UI/b.cpp", "// b\n");
    commit_all(&repo, "Merge pull request #42 from someone/branch");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_prints_progress_lines() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/dialog.cpp", "// dialog\n");
    commit_all(&repo, "UI: Improve settings dialog layout");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Info: commit",
        ))
        .stdout(predicate::str::contains(
            "Checking commit 'UI: Improve settings dialog layout'",
        ));
}

#[test]
fn quiet_silences_output_but_keeps_exit_code() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/dialog.cpp", "// dialog\n");
    commit_all(&repo, "foobar: Fix it.");

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .args(["-q", "-q"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_list_is_checked_against_head_tree() {
    let (dir, _repo, base) = setup_repo();

    let json = format!(
        r#"[
            {{"sha": "{base}", "commit": {{"message": "UI: Improve settings dialog layout"}}}},
            {{"sha": "{base}", "commit": {{"message": "foobar: Fix it."}}}}
        ]"#
    );
    let json_path = dir.path().join("commits.json");
    fs::write(&json_path, json).unwrap();

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-j", json_path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("unknown module name 'foobar'"));
}

#[test]
fn json_from_stdin() {
    let (dir, _repo, base) = setup_repo();

    let json = format!(
        r#"[{{"sha": "{base}", "commit": {{"message": "UI: Improve settings dialog layout"}}}}]"#
    );

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-j", "-"])
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn custom_limits_from_config_file() {
    let (dir, repo, base) = setup_repo();
    write_file(dir.path(), "UI/dialog.cpp", "// dialog\n");
    // 40 characters of title, over a tightened limit of 30
    commit_all(&repo, "UI: Improve settings dialog layout again");

    let config_path = dir.path().join("tight.toml");
    fs::write(&config_path, "[limits]\ntitle = 30\n").unwrap();

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", &format!("{}..HEAD", base)])
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Too long title, 40 characters, limit 30"));
}

#[test]
fn invalid_range_reports_error() {
    let (dir, _repo, _base) = setup_repo();

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .args(["-c", "no-such-ref..HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn no_inputs_is_a_successful_noop() {
    let (dir, _repo, _base) = setup_repo();

    logcheck()
        .args(["-C", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
