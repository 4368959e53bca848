#![allow(clippy::unwrap_used)]
//! CLI smoke tests.
//!
//! These run the `gtl` binary with an isolated config directory and check
//! that precondition failures are reported before any network access and
//! that a full translation prints the backend's text.

mod common;

use assert_cmd::Command;
use axum::routing::post;
use axum::{Json, Router};
use predicates::prelude::*;
use tempfile::TempDir;

use common::{api_error, completion, spawn_server};

/// A `gtl` command with no config file and no API key in the environment.
#[allow(deprecated)]
fn gtl(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gtl").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("GROQ_API_KEY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groq"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("form"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("French"))
        .stdout(predicate::str::contains("ja"))
        .stdout(predicate::str::contains("zh-TW"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("llama-3.1-8b-instant"))
        .stdout(predicate::str::contains("GROQ_API_KEY"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_missing_credential_fails_before_request() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .args(["--to", "French", "Hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("GROQ_API_KEY not found"));
}

#[test]
fn test_missing_credential_reported_before_missing_input() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .write_stdin("")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("GROQ_API_KEY not found"));
}

#[test]
fn test_custom_api_key_env_from_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("gtl");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[gtl]\napi_key_env = \"GTL_SMOKE_TEST_KEY\"\n",
    )
    .unwrap();

    gtl(&home)
        .env_remove("GTL_SMOKE_TEST_KEY")
        .args(["--to", "French", "Hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("GTL_SMOKE_TEST_KEY not found"));
}

#[test]
fn test_empty_input_is_missing_input() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .env("GROQ_API_KEY", "gsk_test")
        .args(["--to", "French"])
        .write_stdin("")
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains(
            "Please enter both text to translate and a target language",
        ));
}

#[test]
fn test_missing_target_language_is_missing_input() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .env("GROQ_API_KEY", "gsk_test")
        .arg("Hello")
        .assert()
        .code(exitcode::USAGE)
        .stderr(predicate::str::contains("target language is empty"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let home = TempDir::new().unwrap();
    gtl(&home)
        .env("GROQ_API_KEY", "gsk_test")
        .args(["--to", "French", "--timeout", "0", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
fn test_corrupt_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("gtl");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[gtl\n").unwrap();

    gtl(&home)
        .env("GROQ_API_KEY", "gsk_test")
        .args(["--to", "French", "Hello"])
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_translate_prints_backend_text() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(completion("Bonjour")) }),
    );
    let base_url = spawn_server(app).await;
    let home = TempDir::new().unwrap();

    let mut cmd = gtl(&home);
    cmd.env("GROQ_API_KEY", "gsk_test")
        .args(["--endpoint", base_url.as_str(), "--to", "fr", "--quiet", "Hello"]);

    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Bonjour\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_backend_failure_is_reported_not_crashed() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                axum::http::StatusCode::UNAUTHORIZED,
                Json(api_error("Invalid API Key")),
            )
        }),
    );
    let base_url = spawn_server(app).await;
    let home = TempDir::new().unwrap();

    let mut cmd = gtl(&home);
    cmd.env("GROQ_API_KEY", "gsk_wrong")
        .args(["--endpoint", base_url.as_str(), "--to", "French", "--quiet", "Hello"]);

    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(output.status.code(), Some(exitcode::UNAVAILABLE));
    assert!(stderr.contains("An error occurred:"), "stderr: {stderr}");
    assert!(stderr.contains("Invalid API Key"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
    assert!(output.stdout.is_empty());
}
