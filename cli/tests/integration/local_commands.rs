//! Integration tests for commands that only touch the local filesystem:
//! `info`, `status`, `remove` and `list --installed`.

#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn claude_agents(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("claude-agents"));
    cmd.env("NO_COLOR", "1").env("HOME", home);
    cmd
}

fn seed(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).expect("mkdir");
    for name in names {
        std::fs::write(dir.join(name), format!("# {name}\n")).expect("write");
    }
}

#[test]
fn test_info_shows_paths_and_repository() {
    let home = tempfile::tempdir().expect("tempdir");
    let agents = home.path().join(".claude/agents");

    claude_agents(home.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation Paths:"))
        .stdout(predicate::str::contains(agents.display().to_string()))
        .stdout(predicate::str::contains(".claude/reference_code"))
        .stdout(predicate::str::contains(".claude/.installer-cache"))
        .stdout(predicate::str::contains("phyter1/claude-code-assets"));
}

#[test]
fn test_status_on_empty_home() {
    let home = tempfile::tempdir().expect("tempdir");

    claude_agents(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation Status"))
        .stdout(predicate::str::contains("0 projects"))
        .stdout(predicate::str::contains("0 B"))
        .stdout(predicate::str::contains("✗"));

    assert!(
        !home.path().join(".claude").exists(),
        "status is read-only"
    );
}

#[test]
fn test_status_reports_installed_items_and_size() {
    let home = tempfile::tempdir().expect("tempdir");
    let agents = home.path().join(".claude/agents");
    std::fs::create_dir_all(&agents).expect("mkdir");
    std::fs::write(agents.join("reviewer.md"), vec![b'x'; 2048]).expect("write");

    claude_agents(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("reviewer"))
        .stdout(predicate::str::contains("2.0 KB"));
}

#[test]
fn test_status_quiet_prints_nothing() {
    let home = tempfile::tempdir().expect("tempdir");

    claude_agents(home.path())
        .args(["status", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_remove_all_agents() {
    let home = tempfile::tempdir().expect("tempdir");
    let agents = home.path().join(".claude/agents");
    seed(&agents, &["reviewer.md", "planner.md"]);

    claude_agents(home.path())
        .args(["remove", "agents", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Claude Agents Remover"))
        .stdout(predicate::str::contains("Successfully removed 2 agents"));

    assert_eq!(std::fs::read_dir(&agents).expect("read_dir").count(), 0);
}

#[test]
fn test_remove_filter_uses_leaf_names() {
    let home = tempfile::tempdir().expect("tempdir");
    let docs = home.path().join(".claude/docs");
    seed(&docs, &["rust-guide.md", "testing.md"]);

    claude_agents(home.path())
        .args(["remove", "docs", "--filter", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed rust-guide.md"));

    assert!(!docs.join("rust-guide.md").exists());
    assert!(docs.join("testing.md").exists());
}

#[test]
fn test_remove_all_types_with_nothing_installed() {
    let home = tempfile::tempdir().expect("tempdir");

    claude_agents(home.path())
        .args(["remove", "all", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No agents installed"))
        .stdout(predicate::str::contains("No documentation installed"))
        .stdout(predicate::str::contains("No reference code installed"));
}

#[test]
fn test_list_installed_is_offline() {
    let home = tempfile::tempdir().expect("tempdir");
    seed(&home.path().join(".claude/agents"), &["reviewer.md"]);

    claude_agents(home.path())
        .args(["list", "agents", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed (1):"))
        .stdout(predicate::str::contains("✓ reviewer"))
        .stdout(predicate::str::contains("reviewer.md").not())
        .stdout(predicate::str::contains("Available").not());
}
