// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

use std::path::Path;
use std::process::{Command, Output};

const PATH_GRAPH: &str = "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 2\n2 1\n3 2\n";

fn cliquegraph(args: &[&str], input: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cliquegraph"))
        .arg(input)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn text_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("path.mtx");
    std::fs::write(&input, PATH_GRAPH).unwrap();

    let output = cliquegraph(&[], &input);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Graph: 3 vertices, 2 edges"));
    assert!(stdout.contains("  (2, {1, 2})\n  (2, {2, 3})\n"));
    assert!(stdout.contains("Average clustering coefficient: 0.000000"));
}

#[test]
fn json_report_is_the_same_for_every_backend() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("path.mtx");
    std::fs::write(&input, PATH_GRAPH).unwrap();

    let mut reports = Vec::new();
    for backend in ["auto", "hashed", "bitset"] {
        for traversal in ["work-stack", "recursive"] {
            let output = cliquegraph(
                &["--format", "json", "--backend", backend, "--traversal", traversal],
                &input,
            );
            assert!(output.status.success());
            let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
            reports.push(value);
        }
    }
    assert_eq!(
        reports[0]["cliques"],
        serde_json::json!([[2, [1, 2]], [2, [2, 3]]])
    );
    assert!(reports.iter().all(|report| report == &reports[0]));
}

#[test]
fn invalid_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.mtx");
    std::fs::write(&input, "3 3 1\n1 7\n").unwrap();

    let output = cliquegraph(&[], &input);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load graph"));
    assert!(stderr.contains("vertex 7 is outside the declared range 1..=3"));
}
