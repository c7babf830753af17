//! Integration tests for the canopy CLI.


use std::fs;

use assert_cmd::Command;
use canopy::test_utils::TempTree;
use harness::run_canopy;
use predicates::prelude::*;

fn canopy() -> Command {
    Command::cargo_bin("canopy").expect("canopy binary should build")
}

#[test]
fn test_tree_prints_to_stdout() {
    let tree = TempTree::new();
    tree.file("b.txt", "");
    tree.dir("a");
    tree.file("c/z.txt", "");

    canopy()
        .arg("tree")
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "├── a/\n├── c/\n│   └── z.txt\n└── b.txt\n",
        ));
}

#[test]
fn test_tree_header_is_root_basename() {
    let tree = TempTree::new();
    tree.dir("sub/inner");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["tree", "sub"]);
    assert!(success);
    assert!(stdout.starts_with("sub/\n"), "got: {stdout}");
}

#[test]
fn test_tree_defaults_to_current_directory() {
    let tree = TempTree::new();
    tree.file("only.txt", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["tree"]);
    assert!(success);
    assert!(stdout.contains("└── only.txt"), "got: {stdout}");
}

#[test]
fn test_tree_max_depth_flag() {
    let tree = TempTree::new();
    tree.file("l1/l2/deep.txt", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["tree", ".", "--max-depth", "1"]);
    assert!(success);
    assert!(stdout.contains("l1/"), "got: {stdout}");
    assert!(!stdout.contains("l2"), "should not descend: {stdout}");
}

#[test]
fn test_tree_exclude_flag_replaces_defaults() {
    let tree = TempTree::new();
    tree.file("node_modules/dep.js", "");
    tree.file("src/hidden_me.rs", "");
    tree.file("src/kept.rs", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["tree", ".", "--exclude", "hidden"]);
    assert!(success);
    // The default set is replaced, so node_modules reappears.
    assert!(stdout.contains("node_modules/"), "got: {stdout}");
    assert!(stdout.contains("kept.rs"), "got: {stdout}");
    assert!(!stdout.contains("hidden_me.rs"), "got: {stdout}");
}

#[test]
fn test_tree_default_excludes_apply() {
    let tree = TempTree::new();
    tree.file("node_modules/dep.js", "");
    tree.file("src/main.rs", "");

    let (stdout, _stderr, success) = run_canopy(tree.path(), &["tree"]);
    assert!(success);
    assert!(!stdout.contains("node_modules"), "got: {stdout}");
    assert!(stdout.contains("main.rs"), "got: {stdout}");
}

#[test]
fn test_tree_output_flag_writes_file() {
    let tree = TempTree::new();
    tree.file("a.txt", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["tree", ".", "--output", "out.txt"]);
    assert!(success);
    assert!(stdout.contains("wrote"), "got: {stdout}");
    assert!(stdout.contains("0 directories, 1 files"), "got: {stdout}");

    let contents = fs::read_to_string(tree.path().join("out.txt")).unwrap();
    assert!(contents.ends_with("└── a.txt\n"), "got: {contents}");
}

#[test]
fn test_diagram_prints_fenced_block() {
    let tree = TempTree::new();
    tree.file("src/main.rs", "");

    canopy()
        .arg("diagram")
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("```mermaid\nflowchart TD\n"))
        .stdout(predicate::str::contains("root_src --> root_src_main_rs"))
        .stdout(predicate::str::ends_with("```\n"));
}

#[test]
fn test_diagram_output_extension_is_coerced() {
    let tree = TempTree::new();
    tree.file("a.txt", "");

    let (stdout, _stderr, success) =
        run_canopy(tree.path(), &["diagram", ".", "--output", "layout.txt"]);
    assert!(success);
    assert!(stdout.contains("layout.md"), "got: {stdout}");
    assert!(!tree.path().join("layout.txt").exists());
    let contents = fs::read_to_string(tree.path().join("layout.md")).unwrap();
    assert!(contents.starts_with("```mermaid\n"));
}

#[test]
fn test_missing_path_fails_with_message() {
    canopy()
        .args(["tree", "/definitely/not/a/real/path"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("canopy: path not found"));
}

#[test]
fn test_file_path_is_not_a_directory() {
    let tree = TempTree::new();
    let file = tree.file("plain.txt", "x");

    canopy()
        .arg("tree")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_tree_and_diagram_share_one_traversal() {
    let tree = TempTree::new();
    tree.file("b.txt", "");
    tree.file("c/z.txt", "");
    tree.dir("a");

    let (text, _, _) = run_canopy(tree.path(), &["tree"]);
    let (diagram, _, _) = run_canopy(tree.path(), &["diagram"]);
    for name in ["a", "c", "z.txt", "b.txt"] {
        assert!(text.contains(name), "text missing {name}");
        assert!(diagram.contains(name), "diagram missing {name}");
    }
}

#[test]
fn test_repeat_runs_are_byte_identical() {
    let tree = TempTree::new();
    tree.file("src/main.rs", "");
    tree.file("src/lib.rs", "");
    tree.file("README.md", "");

    let (first, _, _) = run_canopy(tree.path(), &["tree"]);
    let (second, _, _) = run_canopy(tree.path(), &["tree"]);
    assert_eq!(first, second);
}
