use std::path::Path;
use std::process::{Command, Output};

fn run(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mindtree-compat"))
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("failed to run mindtree-compat")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_check_builtin_pairs() {
    let home = tempfile::tempdir().unwrap();

    let output = run(home.path(), &["check", "FLOAT", "INTEGER"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "compatible");

    let output = run(home.path(), &["check", "STRING", "FLOAT"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "incompatible");

    let output = run(home.path(), &["check", "VARIABLE", "GROUPDATA"]);
    assert_eq!(stdout(&output), "compatible");
}

#[test]
fn test_config_adds_pairs() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("extra.json");
    std::fs::write(&config, r#"{ "pairs": [["STRING", "PATH"]] }"#).unwrap();
    let config = config.to_str().unwrap();

    let output = run(home.path(), &["--config", config, "check", "STRING", "PATH"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "compatible");

    let output = run(home.path(), &["check", "PATH", "STRING", "--config", config]);
    assert_eq!(stdout(&output), "compatible");

    let output = run(home.path(), &["--config", config, "pairs"]);
    let pairs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(pairs["pairs"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!(["PATH", "STRING"])));
}

#[test]
#[cfg(target_os = "linux")]
fn test_default_config_file_is_read() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("mindtree");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("compatibility.json"), r#"{ "pairs": [["STRING", "PATH"]] }"#)
        .unwrap();

    let output = run(home.path(), &["check", "STRING", "PATH"]);
    assert_eq!(stdout(&output), "compatible");
}

#[test]
fn test_failures_exit_non_zero() {
    let home = tempfile::tempdir().unwrap();
    let broken = home.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();

    let output = run(
        home.path(),
        &["--config", broken.to_str().unwrap(), "check", "FLOAT", "INTEGER"],
    );
    assert!(!output.status.success());

    let missing = home.path().join("missing.json");
    let output = run(
        home.path(),
        &["--config", missing.to_str().unwrap(), "check", "FLOAT", "INTEGER"],
    );
    assert!(!output.status.success());

    let output = run(home.path(), &["sockets", "NOPE", "STRING"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ADDPROPERTIES"));
}

#[test]
fn test_sockets_lists_paths() {
    let home = tempfile::tempdir().unwrap();

    let output = run(home.path(), &["sockets", "FILTEROBJECTS", "STRING"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Name Regex\tSTRING");
}

#[test]
fn test_nodes_by_category() {
    let home = tempfile::tempdir().unwrap();

    let output = run(home.path(), &["nodes", "Objects"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Objects\n  ADDPROPERTIES\n  FILTEROBJECTS");

    let output = run(home.path(), &["nodes", "Shading"]);
    assert!(!output.status.success());
}
