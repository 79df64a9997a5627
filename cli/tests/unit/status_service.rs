//! Unit tests for the offline status service.

#![allow(clippy::expect_used)]

use claude_agents_cli::application::services::status::collect_status;
use claude_agents_cli::domain::ItemKind;
use claude_agents_cli::infra::LocalFs;

use crate::mocks::temp_home;

#[test]
fn test_status_of_empty_home() {
    let (_home, config) = temp_home();

    let report = collect_status(&LocalFs, &config);

    assert_eq!(
        report.kinds.iter().map(|k| k.kind).collect::<Vec<_>>(),
        ItemKind::ALL
    );
    assert!(report.kinds.iter().all(|k| !k.root_exists));
    assert_eq!(report.total_items(), 0);
    assert_eq!(report.total_size(), 0);
}

#[test]
fn test_status_counts_sizes_and_skips_hidden_entries() {
    let (_home, config) = temp_home();
    std::fs::create_dir_all(&config.paths.agents).expect("mkdir");
    std::fs::write(config.paths.agents.join("a.md"), vec![b'a'; 100]).expect("write");
    std::fs::write(config.paths.agents.join("b.md"), vec![b'b'; 24]).expect("write");
    std::fs::write(config.paths.agents.join(".DS_Store"), vec![0; 4096]).expect("write");

    let project = config.paths.reference.join("api");
    std::fs::create_dir_all(project.join("src")).expect("mkdir");
    std::fs::create_dir_all(project.join(".git")).expect("mkdir");
    std::fs::write(project.join("src/main.rs"), vec![b'x'; 1000]).expect("write");
    std::fs::write(project.join(".git/HEAD"), vec![b'x'; 500]).expect("write");

    let report = collect_status(&LocalFs, &config);
    let agents = &report.kinds[0];
    let docs = &report.kinds[1];
    let reference = &report.kinds[2];

    assert!(agents.root_exists);
    assert_eq!(agents.installed.len(), 2);
    assert_eq!(agents.size, 124);
    assert!(!docs.root_exists);
    assert_eq!(reference.installed, ["api"]);
    assert_eq!(reference.size, 1000);
    assert_eq!(report.total_items(), 3);
    assert_eq!(report.total_size(), 1124);
}

#[test]
fn test_recent_shows_at_most_three_names() {
    let (_home, config) = temp_home();
    std::fs::create_dir_all(&config.paths.docs).expect("mkdir");
    for name in ["a.md", "b.md", "c.md", "d.md", "e.md"] {
        std::fs::write(config.paths.docs.join(name), "x").expect("write");
    }

    let report = collect_status(&LocalFs, &config);

    assert_eq!(report.kinds[1].installed.len(), 5);
    assert_eq!(report.kinds[1].recent().len(), 3);
}
