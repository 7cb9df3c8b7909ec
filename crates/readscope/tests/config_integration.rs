//! Configuration integration tests.
//!
//! Each test lays out config files in a temp directory, runs the binary from
//! there, and inspects `--json` output: `info` for the merged settings and
//! `score` for thresholds that actually reach the analyzer.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run with `--json` from `dir`, assert success, and parse stdout.
fn run_json(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Value {
    let mut command = cmd();
    for (key, value) in env {
        command.env(key, value);
    }
    let output = command
        .args(["-C", dir.to_str().unwrap(), "--json"])
        .args(args)
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// The `config` object from `info --json`.
fn effective_config(dir: &Path) -> Value {
    run_json(dir, &["info"], &[])["config"].clone()
}

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, body) in files {
        fs::write(tmp.path().join(name), body).unwrap();
    }
    tmp
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn defaults_apply_without_any_file() {
    let tmp = TempDir::new().unwrap();
    let config = effective_config(tmp.path());

    assert!(config["config_file"].is_null());
    assert_eq!(config["log_level"], "info");
    assert_eq!(config["max_sentence_words"], 25);
    assert_eq!(config["max_paragraph_words"], 120);
    assert_eq!(config["max_complex_sentences"], 10);
    assert_eq!(config["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn dotfile_is_found_and_reported() {
    let tmp = project_with(&[(".readscope.toml", "max_sentence_words = 30\n")]);
    let config = effective_config(tmp.path());

    assert_eq!(config["max_sentence_words"], 30);
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".readscope.toml"), "reported: {reported}");
}

#[test]
fn search_walks_up_from_subdirectory() {
    let tmp = project_with(&[(".readscope.toml", "max_paragraph_words = 80\n")]);
    let drafts = tmp.path().join("posts").join("drafts");
    fs::create_dir_all(&drafts).unwrap();

    assert_eq!(effective_config(&drafts)["max_paragraph_words"], 80);
}

#[test]
fn plain_name_wins_over_dotfile() {
    let tmp = project_with(&[
        (".readscope.toml", r#"log_level = "debug""#),
        ("readscope.toml", r#"log_level = "error""#),
    ]);
    assert_eq!(effective_config(tmp.path())["log_level"], "error");
}

#[test]
fn nearest_directory_wins() {
    let tmp = project_with(&[(".readscope.toml", "max_sentence_words = 40\n")]);
    let blog = tmp.path().join("blog");
    fs::create_dir_all(&blog).unwrap();
    fs::write(blog.join(".readscope.toml"), "max_sentence_words = 15\n").unwrap();

    assert_eq!(effective_config(&blog)["max_sentence_words"], 15);
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn yaml_settings_are_read() {
    let tmp = project_with(&[(
        ".readscope.yaml",
        "max_complex_sentences: 3\nmax_grade: 9.5\n",
    )]);
    let config = effective_config(tmp.path());

    assert_eq!(config["max_complex_sentences"], 3);
    assert_eq!(config["max_grade"], 9.5);
}

#[test]
fn json_settings_are_read() {
    let tmp = project_with(&[(
        ".readscope.json",
        r#"{"strip_markdown": true, "disable_input_limit": true}"#,
    )]);
    let config = effective_config(tmp.path());

    assert_eq!(config["strip_markdown"], true);
    assert!(config.get("max_input_bytes").is_none());
}

#[test]
fn wrong_value_type_is_reported() {
    let tmp = project_with(&[(".readscope.toml", r#"max_sentence_words = "lots""#)]);
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn config_flag_overrides_discovered_file() {
    let tmp = project_with(&[
        (".readscope.toml", "max_sentence_words = 40\n"),
        ("strict.toml", "max_sentence_words = 18\n"),
    ]);
    let strict = tmp.path().join("strict.toml");
    let json = run_json(
        tmp.path(),
        &["--config", strict.to_str().unwrap(), "info"],
        &[],
    );
    assert_eq!(json["config"]["max_sentence_words"], 18);
    assert!(
        json["config"]["config_file"]
            .as_str()
            .unwrap()
            .ends_with("strict.toml")
    );
}

#[test]
fn environment_overrides_files() {
    let tmp = project_with(&[(".readscope.toml", "max_sentence_words = 40\n")]);
    let json = run_json(
        tmp.path(),
        &["info"],
        &[("READSCOPE_MAX_SENTENCE_WORDS", "12")],
    );
    assert_eq!(json["config"]["max_sentence_words"], 12);
}

#[test]
fn log_level_flag_overrides_file() {
    let tmp = project_with(&[(".readscope.toml", r#"log_level = "debug""#)]);
    let json = run_json(tmp.path(), &["--log-level", "warn", "info"], &[]);
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Thresholds reach the analyzer
// =============================================================================

#[test]
fn file_threshold_flags_sentence() {
    let tmp = project_with(&[
        (".readscope.toml", "max_sentence_words = 3\n"),
        ("draft.txt", "One two three four five."),
    ]);
    let report = run_json(tmp.path(), &["score", "draft.txt"], &[]);
    assert_eq!(report["complex_sentences"].as_array().unwrap().len(), 1);
}

#[test]
fn score_flag_beats_file_threshold() {
    let tmp = project_with(&[
        (".readscope.toml", "max_sentence_words = 3\n"),
        ("draft.txt", "One two three four five."),
    ]);
    let report = run_json(
        tmp.path(),
        &["score", "draft.txt", "--max-sentence-words", "10"],
        &[],
    );
    assert!(report["complex_sentences"].as_array().unwrap().is_empty());
}

// =============================================================================
// Log file
// =============================================================================

#[test]
fn log_path_receives_plain_log_lines() {
    let tmp = TempDir::new().unwrap();
    let log_path = tmp.path().join("logs").join("run.log");

    cmd()
        .env_remove("RUST_LOG")
        .env("READSCOPE_LOG_PATH", &log_path)
        .args(["-C", tmp.path().to_str().unwrap(), "-v", "info"])
        .assert()
        .success();

    let logged = fs::read_to_string(&log_path).unwrap();
    assert!(logged.contains("CLI initialized"), "log file: {logged}");
    assert!(!logged.contains("\x1b["), "log file should be uncolored");
}
