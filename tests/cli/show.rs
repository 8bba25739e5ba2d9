use crate::support::{edge_args, stdout_json, wgraph_in, DIRECTED_SAMPLE, TRAVERSAL_SAMPLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_show_matrix() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "6", "--directed"])
        .args(edge_args(&DIRECTED_SAMPLE))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 nodes, 7 edges (directed)"))
        .stdout(predicate::str::contains("\t0\t1\t2\t3\t4\t5\n\n"))
        .stdout(predicate::str::contains("0\t0\t4\t2\t0\t0\t0"))
        .stdout(predicate::str::contains("3\t0\t0\t0\t0\t0\t11"));
}

#[test]
fn test_show_undirected_matrix_is_symmetric() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "3", "-e", "0:2:7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 edges (undirected)"))
        .stdout(predicate::str::contains("0\t0\t0\t7"))
        .stdout(predicate::str::contains("2\t7\t0\t0"));
}

#[test]
fn test_show_quiet_omits_summary() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["-q", "show", "-n", "2", "-e", "0:1:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nodes").not())
        .stdout(predicate::str::starts_with("\t0\t1"));
}

#[test]
fn test_show_unweighted_stores_unit_weights() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "2", "--unweighted", "-e", "0:1:9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0\t0\t1"));
}

#[test]
fn test_show_matrix_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "show", "-n", "3", "--directed", "-e", "0:1:4", "-e", "1:2:0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 3);
    assert_eq!(json["directed"], true);
    assert_eq!(json["edge_count"], 2);
    assert_eq!(json["matrix"][0][1].as_f64(), Some(4.0));
    // A zero-weight edge is still an edge; an absent one is null
    assert_eq!(json["matrix"][1][2].as_f64(), Some(0.0));
    assert!(json["matrix"][2][1].is_null());
    assert_eq!(json["edges"][1]["from"], 1);
    assert_eq!(json["edges"][1]["to"], 2);
}

#[test]
fn test_show_list_unweighted() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "--list", "--unweighted", "-n", "5"])
        .args(edge_args(&TRAVERSAL_SAMPLE))
        .assert()
        .success()
        .stdout(predicate::str::contains("5 nodes (undirected)"))
        .stdout(predicate::str::contains("0: [1, 4]"))
        .stdout(predicate::str::contains("1: [0, 4, 3, 2]"))
        .stdout(predicate::str::contains("3: [1, 2, 4]"));
}

#[test]
fn test_show_list_weighted() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "--list", "--directed", "-n", "3", "-e", "0:1:4", "-e", "0:2:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: [(1, 4), (2, 2)]"))
        .stdout(predicate::str::contains("1: []"));
}

#[test]
fn test_show_list_json() {
    let dir = tempdir().unwrap();

    let output = wgraph_in(dir.path())
        .args(["--format", "json", "show", "--list", "-n", "2", "-e", "0:1:3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["adjacency"][0][0]["to"], 1);
    assert_eq!(json["adjacency"][1][0]["to"], 0);
    assert_eq!(json["adjacency"][1][0]["weight"].as_f64(), Some(3.0));
}

#[test]
fn test_show_empty_graph() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 nodes, 0 edges"));
}

#[test]
fn test_show_negative_node_count() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "-2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node count: -2"));
}

#[test]
fn test_show_oversized_node_count() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "8589934592"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("node count"));
}

#[test]
fn test_directed_conflicts_with_undirected() {
    let dir = tempdir().unwrap();

    wgraph_in(dir.path())
        .args(["show", "-n", "2", "--directed", "--undirected"])
        .assert()
        .code(2);
}
