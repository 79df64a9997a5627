//! Unit tests for the remove service, including install/remove round trips.

#![allow(clippy::expect_used)]

use claude_agents_cli::application::services::install::{InstallOptions, install_kind};
use claude_agents_cli::application::services::remove::{
    RemoveOptions, ensure_selection, remove_kind,
};
use claude_agents_cli::domain::{ItemKind, parse_filter};
use claude_agents_cli::infra::LocalFs;

use crate::mocks::{MemorySource, RecordingReporter, entries, sample_manifest, temp_home};

fn seed(dir: &std::path::Path, names: &[&str]) {
    std::fs::create_dir_all(dir).expect("mkdir");
    for name in names {
        std::fs::write(dir.join(name), name).expect("write");
    }
}

fn by_filter(raw: &str) -> RemoveOptions {
    RemoveOptions {
        terms: parse_filter(Some(raw)),
        all: false,
    }
}

#[test]
fn test_guard_refuses_blank_filter() {
    let err = ensure_selection(&by_filter(" , ")).expect_err("blank filter selects nothing");
    assert_eq!(
        err.to_string(),
        "Please specify --all or --filter to remove items"
    );
}

#[test]
fn test_remove_all_agents() {
    let (_home, config) = temp_home();
    seed(&config.paths.agents, &["a.md", "b.md", ".keep"]);
    let reporter = RecordingReporter::default();

    let report = remove_kind(
        &LocalFs,
        &reporter,
        &config,
        ItemKind::Agents,
        &RemoveOptions {
            terms: Vec::new(),
            all: true,
        },
    )
    .expect("remove");

    assert_eq!(report.removed.len(), 2);
    assert_eq!(entries(&config.paths.agents), [".keep"], "hidden entries survive");
    assert!(
        reporter
            .messages("success")
            .contains(&"Successfully removed 2 agents".to_string())
    );
}

#[test]
fn test_agent_filter_matches_leaf_name_exactly() {
    let (_home, config) = temp_home();
    seed(&config.paths.agents, &["reviewer.md", "planner.md"]);
    let reporter = RecordingReporter::default();

    let report = remove_kind(
        &LocalFs,
        &reporter,
        &config,
        ItemKind::Agents,
        &by_filter("reviewer"),
    )
    .expect("remove");

    assert!(report.removed.is_empty());
    assert_eq!(reporter.messages("warn"), ["No matching agents to remove"]);
    assert_eq!(entries(&config.paths.agents), ["planner.md", "reviewer.md"]);

    let report = remove_kind(
        &LocalFs,
        &reporter,
        &config,
        ItemKind::Agents,
        &by_filter("reviewer.md"),
    )
    .expect("remove");
    assert_eq!(report.removed, ["reviewer.md"]);
    assert_eq!(entries(&config.paths.agents), ["planner.md"]);
}

#[test]
fn test_docs_filter_is_substring() {
    let (_home, config) = temp_home();
    seed(&config.paths.docs, &["rust-guide.md", "testing.md"]);

    let report = remove_kind(
        &LocalFs,
        &RecordingReporter::default(),
        &config,
        ItemKind::Docs,
        &by_filter("GUIDE"),
    )
    .expect("remove");

    assert_eq!(report.removed, ["rust-guide.md"]);
    assert_eq!(entries(&config.paths.docs), ["testing.md"]);
}

#[test]
fn test_nothing_installed_warns() {
    let (_home, config) = temp_home();
    let reporter = RecordingReporter::default();

    let report = remove_kind(
        &LocalFs,
        &reporter,
        &config,
        ItemKind::Reference,
        &by_filter("api"),
    )
    .expect("remove");

    assert!(report.removed.is_empty());
    assert_eq!(reporter.messages("warn"), ["No reference code installed"]);
}

#[tokio::test]
async fn test_install_then_remove_round_trip() {
    let (_home, config) = temp_home();
    let source = MemorySource::serving(&config, sample_manifest());
    let reporter = RecordingReporter::default();

    for kind in ItemKind::ALL {
        install_kind(
            &source,
            &LocalFs,
            &reporter,
            &config,
            kind,
            &InstallOptions::default(),
        )
        .await
        .expect("install");
    }
    assert_eq!(entries(&config.paths.reference), ["api"]);

    let report = remove_kind(
        &LocalFs,
        &reporter,
        &config,
        ItemKind::Reference,
        &by_filter("api"),
    )
    .expect("remove");

    assert_eq!(report.removed, ["api"]);
    assert!(entries(&config.paths.reference).is_empty());
    assert_eq!(entries(&config.paths.agents), ["planner.md", "reviewer.md"]);
}
