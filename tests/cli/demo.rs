use crate::support::{stdout_json, wgraph_in};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_demo_human() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("== directed graph =="))
        .stdout(predicate::str::contains(
            "0 -> 5: 0 -> 2 -> 4 -> 3 -> 5 (distance 20)",
        ))
        .stdout(predicate::str::contains("1 -> 5: 1 -> 3 -> 0 -> 5 (distance 20)"))
        .stdout(predicate::str::contains("bfs from 3: 3 1 2 4 0"))
        .stdout(predicate::str::contains("dfs from 3: 3 4 1 2 0"));
}

#[test]
fn test_demo_quiet_skips_sections() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["demo", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("==").not())
        .stdout(predicate::str::contains("(distance 20)"));
}

#[test]
fn test_demo_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["demo", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["directed"]["path"], serde_json::json!([0, 2, 4, 3, 5]));
    assert_eq!(json["undirected"]["path"], serde_json::json!([1, 3, 0, 5]));
    assert_eq!(json["undirected"]["distance"].as_f64(), Some(20.0));
    assert_eq!(json["bfs"]["order"], serde_json::json!([3, 1, 2, 4, 0]));
    assert_eq!(json["dfs"]["order"], serde_json::json!([3, 4, 1, 2, 0]));
}
