//! E2E tests for `between compute` and `between stats`.
//!
//! Covers: JSON schema of both commands, the classic text layout, GEXF and
//! JSON input, config file + flag precedence, and error reporting for bad
//! input.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

fn between_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("between"));
    cmd.current_dir(dir);
    cmd.env("BETWEEN_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

const CHAIN: &str = r#"{
  "nodes": [
    {"id": "a", "label": "A"},
    {"id": "b", "label": "B"},
    {"id": "c", "label": "C"},
    {"id": "d", "label": "D"}
  ],
  "edges": [
    {"source": "a", "target": "b"},
    {"source": "b", "target": "c"},
    {"source": "c", "target": "d"}
  ]
}"#;

const CHAIN_GEXF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph mode="static" defaultedgetype="undirected">
    <nodes>
      <node id="0.0" label="A"/>
      <node id="1.0" label="B"/>
      <node id="2.0" label="C"/>
      <node id="3.0" label="D"/>
    </nodes>
    <edges>
      <edge id="0" source="0.0" target="1.0"/>
      <edge id="1" source="1.0" target="2.0"/>
      <edge id="2" source="2.0" target="3.0"/>
    </edges>
  </graph>
</gexf>"#;

const STAR: &str = r#"{
  "nodes": [{"id": 0, "label": "Hub"}, {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}],
  "links": [
    {"source": 0, "target": 1},
    {"source": 0, "target": 2},
    {"source": 0, "target": 3},
    {"source": 0, "target": 4}
  ]
}"#;

fn compute_json(dir: &Path, args: &[&str]) -> Value {
    let output = between_cmd(dir)
        .arg("compute")
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("compute should not crash");
    assert!(
        output.status.success(),
        "compute failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON from compute")
}

fn score_of(report: &Value, id: &str) -> f64 {
    report["scores"]
        .as_array()
        .expect("scores array")
        .iter()
        .find(|row| row["id"] == id)
        .and_then(|row| row["score"].as_f64())
        .unwrap_or_else(|| panic!("no score for {id}"))
}

// ---------------------------------------------------------------------------
// between compute
// ---------------------------------------------------------------------------

#[test]
fn compute_json_has_expected_fields() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.json", CHAIN);

    let report = compute_json(dir.path(), &[graph.to_str().expect("utf8 path")]);

    assert!(
        report["graph_hash"]
            .as_str()
            .expect("graph_hash")
            .starts_with("blake3:")
    );
    assert_eq!(report["vertex_count"], 4);
    assert_eq!(report["normalization"], "rescaled");
    assert_eq!(report["scores"].as_array().expect("scores").len(), 4);

    assert!((score_of(&report, "b") - 2.0 / 3.0).abs() < 1e-9);
    assert!((score_of(&report, "c") - 2.0 / 3.0).abs() < 1e-9);
    assert!(score_of(&report, "a").abs() < 1e-12);
}

#[test]
fn compute_text_uses_classic_layout() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.json", CHAIN);

    between_cmd(dir.path())
        .args(["compute", graph.to_str().expect("utf8 path"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Betweenness Centrality:\n"))
        .stdout(predicate::str::contains("BC(B) = 0.6667"))
        .stdout(predicate::str::contains("BC(D) = 0.0000"));
}

#[test]
fn compute_reads_gexf_by_extension() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.gexf", CHAIN_GEXF);

    between_cmd(dir.path())
        .args(["compute", graph.to_str().expect("utf8 path"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BC(B) = 0.6667"))
        .stdout(predicate::str::contains("BC(C) = 0.6667"))
        .stdout(predicate::str::contains("BC(A) = 0.0000"));
}

#[test]
fn input_format_flag_overrides_extension() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.txt", CHAIN_GEXF);
    let graph = graph.to_str().expect("utf8 path");

    let report = compute_json(dir.path(), &[graph, "--input-format", "gexf"]);
    assert_eq!(report["vertex_count"], 4);
    assert!((score_of(&report, "1.0") - 2.0 / 3.0).abs() < 1e-9);

    // Without the flag the same file is read as JSON and rejected.
    between_cmd(dir.path())
        .args(["compute", graph, "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid graph document"));
}

#[test]
fn compute_star_hub_is_one_with_numeric_ids() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "star.json", STAR);

    let report = compute_json(dir.path(), &[graph.to_str().expect("utf8 path")]);
    assert!((score_of(&report, "0") - 1.0).abs() < 1e-12);
    for leaf in ["1", "2", "3", "4"] {
        assert!(score_of(&report, leaf).abs() < 1e-12);
    }
}

#[test]
fn compute_corrected_sorted_by_score() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "star.json", STAR);

    let report = compute_json(
        dir.path(),
        &[
            graph.to_str().expect("utf8 path"),
            "--normalization",
            "corrected",
            "--sort",
            "score",
            "--top",
            "1",
        ],
    );

    let scores = report["scores"].as_array().expect("scores");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0]["name"], "Hub");
    assert_eq!(scores[0]["score"], 6.0);
    assert_eq!(report["normalization"], "corrected");
}

#[test]
fn config_file_sets_defaults_and_flags_override() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.json", CHAIN);
    let config = write_file(
        dir.path(),
        "between.toml",
        "normalization = \"corrected\"\nparallel = true\nchunk_size = 1\n",
    );
    let graph = graph.to_str().expect("utf8 path");
    let config = config.to_str().expect("utf8 path");

    let from_file = compute_json(dir.path(), &[graph, "--config", config]);
    assert_eq!(from_file["normalization"], "corrected");
    assert!((score_of(&from_file, "b") - 2.0).abs() < 1e-9);

    let overridden = compute_json(
        dir.path(),
        &[graph, "--config", config, "--normalization", "rescaled"],
    );
    assert_eq!(overridden["normalization"], "rescaled");
}

#[test]
fn dangling_edge_fails_with_error_code() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(
        dir.path(),
        "bad.json",
        r#"{"nodes": [{"id": "a"}], "edges": [{"source": "a", "target": "zz"}]}"#,
    );

    let output = between_cmd(dir.path())
        .args(["compute", graph.to_str().expect("utf8 path"), "--format", "json"])
        .output()
        .expect("compute should not crash");

    assert!(!output.status.success());
    let stderr: Value = serde_json::from_slice(&output.stderr).unwrap_or_else(|e| {
        panic!(
            "stderr is not a single JSON document ({e}): {}",
            String::from_utf8_lossy(&output.stderr)
        )
    });
    assert_eq!(stderr["error"]["error_code"], "E2001");
    assert!(
        stderr["error"]["message"]
            .as_str()
            .expect("message")
            .contains("zz")
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn fractional_json_id_is_an_invalid_document() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(
        dir.path(),
        "frac.json",
        r#"{"nodes": [{"id": 1.0}], "edges": [{"source": 1, "target": 1}]}"#,
    );

    let output = between_cmd(dir.path())
        .args(["compute", graph.to_str().expect("utf8 path"), "--json"])
        .output()
        .expect("compute should not crash");

    assert!(!output.status.success());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("JSON error on stderr");
    assert_eq!(stderr["error"]["error_code"], "E4001");
}

#[test]
fn malformed_document_fails_in_text_mode() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "bad.json", "{ nodes: oops");

    between_cmd(dir.path())
        .args(["compute", graph.to_str().expect("utf8 path"), "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: "))
        .stderr(predicate::str::contains("invalid graph document"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    between_cmd(dir.path())
        .args(["compute", "nope.json", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

// ---------------------------------------------------------------------------
// between stats
// ---------------------------------------------------------------------------

#[test]
fn stats_json_reports_structure() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.json", CHAIN);

    let output = between_cmd(dir.path())
        .args(["stats", graph.to_str().expect("utf8 path"), "--json"])
        .output()
        .expect("stats should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON from stats");
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 3);
    assert_eq!(json["component_count"], 1);
    assert_eq!(json["isolated_vertex_count"], 0);
    assert_eq!(json["max_degree"], 2);
    assert!((json["density"].as_f64().expect("density") - 0.5).abs() < 1e-12);
    assert!(json["graph_hash"].as_str().expect("hash").starts_with("blake3:"));
}

#[test]
fn stats_reads_gexf() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "chain.gexf", CHAIN_GEXF);

    let output = between_cmd(dir.path())
        .args(["stats", graph.to_str().expect("utf8 path"), "--json"])
        .output()
        .expect("stats should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON from stats");
    assert_eq!(json["vertex_count"], 4);
    assert_eq!(json["edge_count"], 3);
}

#[test]
fn stats_text_lines() {
    let dir = TempDir::new().expect("temp dir");
    let graph = write_file(dir.path(), "star.json", STAR);

    between_cmd(dir.path())
        .args(["stats", graph.to_str().expect("utf8 path"), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices=5"))
        .stdout(predicate::str::contains("edges=4"))
        .stdout(predicate::str::contains("max_degree=4"));
}
