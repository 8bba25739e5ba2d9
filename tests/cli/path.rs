use crate::support::{edge_args, stdout_json, wgraph_in, DIRECTED_SAMPLE, UNDIRECTED_SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Shortest path
// ============================================================================

#[test]
fn test_path_directed_sample() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "--nodes", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .args(["0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 2 -> 4 -> 3 -> 5"))
        .stdout(predicate::str::contains("distance: 20 (4 hops)"));
}

#[test]
fn test_path_undirected_sample() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "6"])
        .args(edge_args(&UNDIRECTED_SAMPLE))
        .args(["1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 3 -> 0 -> 5"))
        .stdout(predicate::str::contains("distance: 20"));
}

#[test]
fn test_path_heap_strategy_matches() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "6", "--directed", "--strategy", "heap"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .args(["0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 2 -> 4 -> 3 -> 5"));
}

#[test]
fn test_path_unknown_strategy_is_usage_error() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "2", "--strategy", "astar", "0", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("strategy"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "path", "-n", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .args(["0", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!([0, 2, 4, 3, 5]));
    assert_eq!(json["distance"].as_f64(), Some(20.0));
    assert_eq!(json["path_length"], 4);
    assert_eq!(json["strategy"], "dense-scan");
}

#[test]
fn test_path_source_equals_target() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "3", "-e", "0:1:5", "2", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 0 (0 hops)"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .args(["5", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unreachable)"))
        .stdout(predicate::str::contains("no path from 5 to 0"));
}

#[test]
fn test_path_unreachable_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "path", "-n", "4", "-e", "0:1", "-e", "2:3", "0", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json["distance"].is_null());
}

// ============================================================================
// Invalid input
// ============================================================================

#[test]
fn test_path_target_out_of_range_exit_code_3() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "6", "0", "6"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid node 6"));
}

#[test]
fn test_path_negative_node_exit_code_3() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "3", "--", "-1", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid node -1"));
}

#[test]
fn test_path_invalid_node_json_envelope() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "path", "-n", "3", "0", "7"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_node");
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["node"], 7);
    assert_eq!(json["error"]["node_count"], 3);
}

#[test]
fn test_edge_endpoint_out_of_range() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "3", "-e", "0:5:1", "0", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid node 5"));
}

#[test]
fn test_malformed_edge_is_usage_error() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "3", "-e", "0-1", "0", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid edge"));
}

#[test]
fn test_malformed_edge_json_envelope() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "path", "-n", "3", "-e", "a:b", "0", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_infinite_weight_rejected() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["path", "-n", "2", "-e", "0:1:inf", "0", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weights must be finite"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["--quiet", "path", "-n", "2", "0", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Distance table
// ============================================================================

#[test]
fn test_distances_table() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["distances", "-n", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("distances from 0:"))
        .stdout(predicate::str::contains("3\t9\t0 -> 2 -> 4 -> 3"))
        .stdout(predicate::str::contains("5\t20\t0 -> 2 -> 4 -> 3 -> 5"));
}

#[test]
fn test_distances_marks_unreachable() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["distances", "-n", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tunreachable"))
        .stdout(predicate::str::contains("5\t11\t3 -> 5"));
}

#[test]
fn test_distances_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "distances", "-n", "6", "--strategy", "heap"])
        .args(edge_args(&UNDIRECTED_SAMPLE))
        .arg("1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], 1);
    assert_eq!(json["strategy"], "binary-heap");
    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 6);
    assert_eq!(distances[5]["distance"].as_f64(), Some(20.0));
    assert_eq!(distances[5]["predecessor"], 0);
    assert!(distances[1]["predecessor"].is_null());
}
