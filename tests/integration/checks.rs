//! Auxiliary checks against a stub backend

use serde_json::Value;
use tempfile::TempDir;

use shuttle::auth::Credentials;
use shuttle::checks::{run_endpoint_check, CheckStatus};
use shuttle::commands::checks::{self, CheckSelection};
use shuttle::commands::Verdict;
use shuttle::config::EndpointCheck;
use shuttle::probe::{Method, ReqwestTransport};

use super::helpers::*;

fn endpoint(path: &str, label: &str) -> EndpointCheck {
    EndpointCheck {
        method: Method::Get,
        path: path.to_string(),
        label: label.to_string(),
    }
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Some(std::time::Duration::from_secs(5))).expect("transport should build")
}

#[test]
fn test_endpoint_check_passes_when_all_answer_ok() {
    let backend = StubServer::new()
        .with_login()
        .get("/api/v1/auth/users/", 200, "[]")
        .get("/api/v1/master/prefectures/", 200, "[]")
        .spawn();

    let result = run_endpoint_check(
        &transport(),
        &backend.url,
        &Credentials::default(),
        &[
            endpoint("/api/v1/auth/users/", "Users"),
            endpoint("/api/v1/master/prefectures/", "Prefectures"),
        ],
    );

    assert_eq!(result.name, "api_endpoints");
    assert!(result.passed());
    assert_eq!(backend.requests_to("/api/v1/auth/login").len(), 1);
}

#[test]
fn test_endpoint_check_names_failing_endpoints() {
    let backend = StubServer::new()
        .with_login()
        .get("/api/v1/auth/users/", 200, "[]")
        .get("/api/v1/master/prefectures/", 500, "boom")
        .spawn();

    let result = run_endpoint_check(
        &transport(),
        &backend.url,
        &Credentials::default(),
        &[
            endpoint("/api/v1/auth/users/", "Users"),
            endpoint("/api/v1/master/prefectures/", "Prefectures"),
        ],
    );

    match result.status {
        CheckStatus::Failed { diagnostics } => {
            assert_eq!(diagnostics.len(), 1);
            assert!(diagnostics[0].starts_with("Prefectures (GET /api/v1/master/prefectures/)"));
            assert!(diagnostics[0].ends_with("500"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_endpoint_check_fails_on_rejected_login() {
    let backend = StubServer::new()
        .post("/api/v1/auth/login", 403, "{}")
        .spawn();

    let result = run_endpoint_check(
        &transport(),
        &backend.url,
        &Credentials::default(),
        &[endpoint("/api/v1/auth/users/", "Users")],
    );

    assert!(matches!(result.status, CheckStatus::Failed { .. }));
    assert!(backend.requests_to("/api/v1/auth/users/").is_empty());
}

#[test]
fn test_checks_command_writes_summary() {
    let dir = TempDir::new().expect("temp dir");
    let backend = StubServer::new()
        .with_login()
        .get("/api/v1/master/sales-statuses/", 200, "[]")
        .get("/api/v1/auth/users/", 200, "[]")
        .get("/api/v1/master/prefectures/", 200, "[]")
        .spawn();
    let mut config = config_for(&backend.url, &closed_port_url(), dir.path());
    config.checks.report_path = dir.path().join("checks.json");

    let selection = CheckSelection {
        typecheck: false,
        build: false,
        endpoints: true,
    };
    let verdict = checks::execute(&config, selection).expect("command should run");

    assert_eq!(verdict, Verdict::Passed);
    let content =
        std::fs::read_to_string(&config.checks.report_path).expect("report should exist");
    let summary: Value = serde_json::from_str(&content).expect("report is JSON");
    assert_eq!(summary["results"][0]["name"], "api_endpoints");
    assert_eq!(summary["results"][0]["status"], "passed");
}

#[test]
fn test_missing_tool_is_skipped_without_failing_the_run() {
    let dir = TempDir::new().expect("temp dir");
    let backend = StubServer::new()
        .with_login()
        .get("/api/v1/master/sales-statuses/", 200, "[]")
        .get("/api/v1/auth/users/", 200, "[]")
        .get("/api/v1/master/prefectures/", 200, "[]")
        .spawn();
    let mut config = config_for(&backend.url, &closed_port_url(), dir.path());
    config.checks.report_path = dir.path().join("checks.json");
    config.checks.project_dir = dir.path().to_path_buf();
    config.checks.typecheck_command = vec!["shuttle-no-such-typechecker".to_string()];

    let selection = CheckSelection {
        typecheck: true,
        build: false,
        endpoints: true,
    };
    let verdict = checks::execute(&config, selection).expect("command should run");

    assert_eq!(verdict, Verdict::Passed);
    let content =
        std::fs::read_to_string(&config.checks.report_path).expect("report should exist");
    let summary: Value = serde_json::from_str(&content).expect("report is JSON");
    assert_eq!(summary["results"][0]["name"], "typescript");
    assert_eq!(summary["results"][0]["status"], "skipped");
    assert_eq!(summary["results"][1]["status"], "passed");
}
