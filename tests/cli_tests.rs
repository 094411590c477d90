//! Integration tests for the phoenix CLI
//!
//! These tests run the phoenix binary against edge-list files in a temp dir.

mod support;

use predicates::prelude::*;
use support::{phoenix, stdout_json, write_graph, DIAMOND, RING, WEIGHTED};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    phoenix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: phoenix"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("metrics"));
}

#[test]
fn test_version_flag() {
    phoenix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("phoenix"));
}

#[test]
fn test_no_command_prints_hint() {
    phoenix()
        .assert()
        .success()
        .stdout(predicate::str::contains("Run `phoenix --help`"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_dfs_order() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .args(["search", file.to_str().unwrap(), "--start", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dfs from 5: 5 2 3 7 6 4 0 1"))
        .stdout(predicate::str::contains("reached 8 of 8 vertices (connected)"));
}

#[test]
fn test_search_bfs_order_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    let output = phoenix()
        .args(["--format", "json", "search"])
        .arg(&file)
        .args(["--start", "5", "--order", "bfs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["order"], "bfs");
    assert_eq!(json["visited"], serde_json::json!([5, 2, 4, 3, 0, 7, 1, 6]));
    assert_eq!(json["component_size"], 8);
    assert_eq!(json["connected"], true);
}

#[test]
fn test_search_declared_vertices_not_connected() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .arg("search")
        .arg(&file)
        .args(["--start", "5", "--vertices", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reached 8 of 10 vertices (not connected)"));
}

#[test]
fn test_search_quiet_prints_order_only() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .args(["--quiet", "search"])
        .arg(&file)
        .args(["--start", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dfs from 0:"))
        .stdout(predicate::str::contains("reached").not());
}

// ============================================================================
// paths
// ============================================================================

#[test]
fn test_paths_bfs_distances_and_path() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    let output = phoenix()
        .args(["--format", "json", "paths"])
        .arg(&file)
        .args(["--source", "5", "--algorithm", "bfs", "--target", "6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["metric"], "hops");
    let distances: Vec<f64> = json["vertices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["distance"].as_f64().unwrap())
        .collect();
    assert_eq!(distances, vec![2.0, 3.0, 1.0, 2.0, 1.0, 0.0, 4.0, 3.0]);
    assert_eq!(json["path"]["vertices"], serde_json::json!([5, 2, 3, 7, 6]));
    assert_eq!(json["eccentricity"].as_f64(), Some(4.0));
}

#[test]
fn test_paths_dijkstra_human() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "weighted.csv", WEIGHTED);

    phoenix()
        .arg("paths")
        .arg(&file)
        .args(["--source", "0", "--target", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra tree from 0 (6 of 6 vertices reached)"))
        .stdout(predicate::str::contains("path 0 -> 3: 0 1 3"))
        .stdout(predicate::str::contains("non-negative: yes"))
        .stdout(predicate::str::contains("eccentricity: 14"));
}

#[test]
fn test_paths_unreachable_vertices() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "weighted.csv", WEIGHTED);

    let output = phoenix()
        .args(["--format", "json", "paths"])
        .arg(&file)
        .args(["--source", "3", "--target", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["reached"], 3);
    assert_eq!(json["vertices"][0]["reachable"], false);
    assert!(json["vertices"][0]["distance"].is_null());
    assert!(json["vertices"][0]["predecessor"].is_null());
    assert!(json["path"]["vertices"].is_null());
    assert!(json["eccentricity"].is_null());
}

#[test]
fn test_paths_negative_weight_flagged() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "negative.txt", "0,1,2\n1,2,-5\n");

    phoenix()
        .arg("paths")
        .arg(&file)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("non-negative: no"));
}

// ============================================================================
// metrics
// ============================================================================

#[test]
fn test_metrics_weighted() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "weighted.csv", WEIGHTED);

    phoenix()
        .arg("metrics")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("diameter: inf"))
        .stdout(predicate::str::contains("radius: 14"))
        .stdout(predicate::str::contains("center: 0"));
}

#[test]
fn test_metrics_undirected_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0 1\n1 2\n");

    let output = phoenix()
        .args(["--format", "json", "metrics"])
        .arg(&file)
        .args(["--algorithm", "bfs", "--kind", "undirected-unweighted"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["eccentricities"], serde_json::json!([2.0, 1.0, 2.0]));
    assert_eq!(json["diameter"].as_f64(), Some(2.0));
    assert_eq!(json["radius"].as_f64(), Some(1.0));
    assert_eq!(json["center"], serde_json::json!([1]));
}

#[test]
fn test_metrics_empty_graph() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "empty.txt", "# nothing here\n");

    phoenix()
        .arg("metrics")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph has no vertices"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_out_of_range_start() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .arg("search")
        .arg(&file)
        .args(["--start", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "error: vertex 9 out of range (graph has 8 vertices)",
        ));
}

#[test]
fn test_out_of_range_json_envelope() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    let output = phoenix()
        .args(["--format", "json", "paths"])
        .arg(&file)
        .args(["--source", "0", "--target", "42"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "vertex_out_of_range");
    assert_eq!(json["error"]["vertex"], 42);
    assert_eq!(json["error"]["vertex_count"], 8);
}

#[test]
fn test_malformed_edge_list() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "bad.txt", "0,1\n1,x\n");

    phoenix()
        .arg("search")
        .arg(&file)
        .args(["--start", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge list at line 2"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();

    phoenix()
        .arg("search")
        .arg(dir.path().join("missing.txt"))
        .args(["--start", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .args(["--quiet", "search"])
        .arg(&file)
        .args(["--start", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_kind_is_usage_error() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "ring.txt", RING);

    phoenix()
        .arg("metrics")
        .arg(&file)
        .args(["--kind", "sideways"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let output = phoenix()
        .args(["--format", "json", "search", "graph.txt"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert_eq!(json["error"]["code"], 2);
}

#[test]
fn test_negative_first_line_is_not_a_header() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "bad.txt", "-1,2\n0,1\n");

    phoenix()
        .arg("metrics")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge list at line 1"));
}

#[test]
fn test_huge_vertex_id_is_data_error() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "huge.txt", &format!("0,1\n1,{}\n", usize::MAX));

    phoenix()
        .arg("metrics")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge list at line 2"));
}

// ============================================================================
// all paths and betweenness
// ============================================================================

#[test]
fn test_paths_all_lists_ties() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "diamond.txt", DIAMOND);

    phoenix()
        .arg("paths")
        .arg(&file)
        .args(["--source", "0", "--target", "3", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path 0 -> 3: 0 1 3"))
        .stdout(predicate::str::contains("2 shortest path(s):"))
        .stdout(predicate::str::contains("  0 2 3"));
}

#[test]
fn test_paths_all_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "diamond.txt", DIAMOND);

    let output = phoenix()
        .args(["--format", "json", "paths"])
        .arg(&file)
        .args(["-s", "0", "-t", "3", "--all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["path"]["vertices"], serde_json::json!([0, 1, 3]));
    assert_eq!(
        json["path"]["all"],
        serde_json::json!([[0, 1, 3], [0, 2, 3]])
    );
}

#[test]
fn test_betweenness_directed() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "diamond.txt", DIAMOND);

    phoenix()
        .arg("betweenness")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("0->1        1.5"))
        .stdout(predicate::str::contains("2->3        1.5"));
}

#[test]
fn test_betweenness_undirected_top_json() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0,1\n1,2\n2,3\n");

    let output = phoenix()
        .args(["--format", "json", "betweenness"])
        .arg(&file)
        .args(["--kind", "undirected-unweighted", "--top", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["undirected"], true);
    // the middle edge lies on the paths of 4 of the 6 pairs
    assert_eq!(
        json["edges"],
        serde_json::json!([{ "from": 1, "to": 2, "score": 4.0 }])
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0,1\n1,2\n");
    let config = dir.path().join("phoenix.toml");
    std::fs::write(
        &config,
        "[graph]\nkind = \"undirected-unweighted\"\nalgorithm = \"bfs\"\n",
    )
    .unwrap();

    phoenix()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .args(["--source", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs tree from 1 (3 of 3 vertices reached)"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0,1\n1,2\n");
    let config = dir.path().join("phoenix.toml");
    std::fs::write(&config, "[graph]\nkind = \"undirected-unweighted\"\n").unwrap();

    phoenix()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .args(["--source", "1", "--kind", "directed-weighted"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 of 3 vertices reached)"));
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0,1\n1,2\n");
    std::fs::write(
        dir.path().join("config.toml"),
        "[graph]\nalgorithm = \"bfs\"\n",
    )
    .unwrap();

    phoenix()
        .env("PHOENIX_CONFIG_DIR", dir.path())
        .arg("paths")
        .arg(&file)
        .args(["--source", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs tree from 0"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    let file = write_graph(dir.path(), "chain.txt", "0,1\n");

    phoenix()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("metrics")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}
