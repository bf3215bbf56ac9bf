//! End-to-end runs of the java2ceylon binary.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

const GETTER_UNIT: &str = r#"{"types": [{"class": {"name": "A", "body": [
    {"method": {"name": "m", "body": {"stmts": [
        {"expr": {"call": {"target": {"name": "p"}, "name": "getName"}}}
    ]}}}
]}}]}"#;

/// Binary isolated from the user's global config, run inside `dir`.
fn java2ceylon(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("java2ceylon").unwrap();
    cmd.current_dir(dir).env("XDG_CONFIG_HOME", dir.join("xdg"));
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to execute java2ceylon");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    let out = stdout(
        java2ceylon(dir.path())
            .arg("-")
            .write_stdin(r#"{"types": [{"class": {"name": "Main"}}]}"#),
    );
    assert_eq!(out, "class Main() {\n}\n");
}

#[test]
fn test_output_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("A.json"), GETTER_UNIT).unwrap();
    let out = stdout(java2ceylon(dir.path()).args(["A.json", "-o", "A.ceylon"]));
    assert!(out.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("A.ceylon")).unwrap(),
        "class A() {\n    void m() {\n        p.getName();\n    }\n}\n"
    );
}

#[test]
fn test_convert_getters_flag() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("A.json"), GETTER_UNIT).unwrap();
    let out = stdout(java2ceylon(dir.path()).args(["A.json", "--convert-getters"]));
    assert!(out.contains("        p.name;\n"));
}

#[test]
fn test_project_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("A.json"), GETTER_UNIT).unwrap();
    std::fs::create_dir_all(dir.path().join(".java2ceylon")).unwrap();
    std::fs::write(
        dir.path().join(".java2ceylon/config.toml"),
        "[translate]\nconvert_getters = true\n",
    )
    .unwrap();
    let out = stdout(java2ceylon(dir.path()).arg("A.json"));
    assert!(out.contains("p.name;"));
}

#[test]
fn test_out_dir_with_several_inputs() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("A.json"), GETTER_UNIT).unwrap();
    std::fs::write(
        dir.path().join("B.json"),
        r#"{"types": [{"class": {"name": "B"}}]}"#,
    )
    .unwrap();
    stdout(java2ceylon(dir.path()).args(["A.json", "B.json", "--out-dir", "gen"]));
    assert!(dir.path().join("gen/A.ceylon").is_file());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("gen/B.ceylon")).unwrap(),
        "class B() {\n}\n"
    );
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let output = java2ceylon(dir.path()).arg("Missing.json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing.json"));
}
