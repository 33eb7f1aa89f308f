//! Integration tests for CLI functionality

use std::io::Write;
use std::process::Command;

use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn gitlab_tool_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("gitlab-tool")
}

/// Command with the CI/CD environment cleared
fn gitlab_tool() -> Command {
    let mut cmd = Command::new(gitlab_tool_bin());
    cmd.env_remove("GITLAB_PRIVATE_TOKEN")
        .env_remove("CI_SERVER_URL")
        .env_remove("CI_PROJECT_ID");
    cmd
}

fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let output = gitlab_tool().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("download"));
    assert!(stdout.contains("commit"));
    assert!(stdout.contains("dl"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let output = gitlab_tool().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("gitlab-tool"));
}

#[test]
fn test_download_help_lists_flags() {
    let output = gitlab_tool().args(["dl", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--job-name", "--file-name", "--create-dirs", "--keep-src", "--extract"] {
        assert!(stdout.contains(flag), "missing {}", flag);
    }
}

#[test]
fn test_download_requires_job_name() {
    assert_cmd::Command::new(gitlab_tool_bin())
        .args(["download", "-p", "1", "-t", "tok"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--job-name"));
}

#[test]
fn test_invalid_acceptable_status() {
    assert_cmd::Command::new(gitlab_tool_bin())
        .args(["download", "-j", "build", "-a", "running"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_commit_list_invalid_since() {
    assert_cmd::Command::new(gitlab_tool_bin())
        .args(["commit", "list", "--since", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error converting date"));
}

#[test]
fn test_missing_token() {
    let output = gitlab_tool()
        .args(["download", "-j", "build", "-p", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GITLAB_PRIVATE_TOKEN"));
}

#[test]
fn test_missing_project_id() {
    let output = gitlab_tool()
        .args(["-t", "tok", "commit", "ls"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("project-id"));
}

#[test]
fn test_invalid_gitlab_url() {
    let output = gitlab_tool()
        .args(["-t", "tok", "-u", "ftp://gitlab.example.com", "-p", "1", "commit", "ls"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_extract_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/123/pipelines"))
        .and(query_param("ref", "main"))
        .and(query_param("status", "success"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1002, "status": "success", "ref": "main", "updated_at": "2024-05-02T10:00:00Z"},
            {"id": 1001, "status": "success", "ref": "main", "updated_at": "2024-05-01T10:00:00Z"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/123/pipelines/1002/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 6002, "name": "build", "pipeline": {"id": 1002}}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/123/jobs/artifacts/main/download"))
        .and(query_param("job", "build"))
        .and(header("PRIVATE-TOKEN", "secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(zip_bytes(&[("bin/app", b"binary"), ("VERSION", b"1.0.0")])),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("out");
    let uri = mock_server.uri();
    let dest_arg = dest.to_string_lossy().to_string();

    let output = tokio::task::spawn_blocking(move || {
        gitlab_tool()
            .env("GITLAB_PRIVATE_TOKEN", "secret")
            .env("CI_SERVER_URL", &uri)
            .env("CI_PROJECT_ID", "123")
            .args(["dl", "-j", "build", "-r", "main", "-d", &dest_arg, "-c", "-x", "-q"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Source: latest successful 'build' job on 'main'"));
    assert!(stdout.contains("Extracted: 2 entries"));
    assert_eq!(std::fs::read(dest.join("bin/app")).unwrap(), b"binary");
    assert_eq!(std::fs::read(dest.join("VERSION")).unwrap(), b"1.0.0");
    assert!(!dest.join("artifacts.zip").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_job_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/123/pipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1002, "status": "success", "ref": "master"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/123/pipelines/1002/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = mock_server.uri();
    let dest_arg = dir.path().to_string_lossy().to_string();

    let output = tokio::task::spawn_blocking(move || {
        gitlab_tool()
            .args(["-t", "secret", "-u", &uri, "-p", "123", "-q"])
            .args(["download", "-j", "deploy", "-d", &dest_arg])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("The job 'deploy' is not found in pipeline 1002"));
    assert!(!dir.path().join("artifacts.zip").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_commit_list_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/projects/42/repository/commits"))
        .and(query_param("ref_name", "develop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "ed899a2f4b50b4370feeea94676502b42383c746",
                "short_id": "ed899a2f",
                "title": "Add pipeline lookup",
                "author_name": "Jane Doe",
                "parent_ids": []
            }
        ])))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let output = tokio::task::spawn_blocking(move || {
        gitlab_tool()
            .args(["-t", "secret", "-u", &uri, "-p", "42", "-r", "develop", "-q"])
            .args(["commit", "list", "--format", "json"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let commits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(commits[0]["short_id"], "ed899a2f");
    assert_eq!(commits[0]["parent_ids"], serde_json::json!([]));
}
