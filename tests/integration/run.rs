//! Full verification runs over HTTP

use serde_json::Value;
use tempfile::TempDir;

use shuttle::auth::{AuthError, Credentials};
use shuttle::commands::{run, Verdict};
use shuttle::detect::ErrorMatcher;
use shuttle::probe::ReqwestTransport;
use shuttle::verify::{
    EngineSettings, FatalPrecondition, RunMode, RunState, SilentObserver, VerificationEngine,
};

use super::helpers::*;

const PAGE: &str = "<html><body><div id=\"root\"></div></body></html>";

fn engine(backend: &str, frontend: &str) -> VerificationEngine<ReqwestTransport> {
    let transport = ReqwestTransport::new(Some(std::time::Duration::from_secs(5)))
        .expect("transport should build");
    VerificationEngine::new(
        transport,
        small_registry(),
        ErrorMatcher::new().expect("signatures should compile"),
        EngineSettings {
            backend_url: backend.to_string(),
            frontend_url: frontend.to_string(),
            credentials: Credentials::default(),
            mode: RunMode::Integration,
        },
    )
}

fn healthy_backend() -> RunningStub {
    StubServer::new()
        .with_login()
        .get("/api/v1/customers/", 200, "[]")
        .get("/api/v1/masters/prefectures", 200, "[]")
        .spawn()
}

fn healthy_frontend() -> RunningStub {
    StubServer::new()
        .get("/", 200, PAGE)
        .get("/login", 200, PAGE)
        .get("/customers", 200, PAGE)
        .spawn()
}

#[test]
fn test_healthy_stack_passes_every_check() {
    let backend = healthy_backend();
    let frontend = healthy_frontend();
    let mut engine = engine(&backend.url, &frontend.url);

    let report = engine
        .run(&mut SilentObserver)
        .expect("run should complete");

    assert_eq!(engine.state(), RunState::Reported);
    assert_eq!(report.total_routes(), 2);
    assert_eq!(report.total_apis(), 2);
    assert_eq!(report.successful_apis(), 2);
    assert_eq!(report.api_success_rate(), 100.0);
    assert!(report.all_passed());
}

#[test]
fn test_login_sends_credentials_and_apis_carry_token() {
    let backend = healthy_backend();
    let frontend = healthy_frontend();

    engine(&backend.url, &frontend.url)
        .run(&mut SilentObserver)
        .expect("run should complete");

    let logins = backend.requests_to("/api/v1/auth/login");
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].method, "POST");
    let body: Value = serde_json::from_str(&logins[0].body).expect("login body is JSON");
    assert_eq!(body["email"], "user@example.com");
    assert_eq!(body["password"], "password123");

    let expected = format!("Bearer {TOKEN}");
    for request in backend.requests().iter().filter(|r| r.method == "GET") {
        assert_eq!(request.authorization.as_deref(), Some(expected.as_str()));
    }
    assert!(frontend.requests().iter().all(|r| r.authorization.is_none()));
}

#[test]
fn test_rejected_login_aborts_before_frontend() {
    let backend = StubServer::new()
        .post("/api/v1/auth/login", 401, r#"{"detail":"bad credentials"}"#)
        .spawn();
    let frontend = healthy_frontend();
    let mut engine = engine(&backend.url, &frontend.url);

    let err = engine
        .run(&mut SilentObserver)
        .expect_err("login should fail");

    assert!(matches!(
        err,
        FatalPrecondition::AuthFailed(AuthError::Status(401))
    ));
    assert_eq!(engine.state(), RunState::AuthFailed);
    assert!(frontend.requests().is_empty());
}

#[test]
fn test_frontend_down_is_fatal() {
    let backend = healthy_backend();
    let mut engine = engine(&backend.url, &closed_port_url());

    let err = engine
        .run(&mut SilentObserver)
        .expect_err("frontend should be unreachable");

    assert!(matches!(
        &err,
        FatalPrecondition::FrontendUnreachable { reason, .. } if reason.starts_with("connection failed")
    ));
    assert_eq!(engine.state(), RunState::FrontendUnreachable);
    assert!(backend.requests_to("/api/v1/customers/").is_empty());
}

#[test]
fn test_missing_api_is_recorded_not_fatal() {
    let backend = StubServer::new()
        .with_login()
        .get("/api/v1/customers/", 200, "[]")
        .spawn();
    let frontend = healthy_frontend();

    let report = engine(&backend.url, &frontend.url)
        .run(&mut SilentObserver)
        .expect("run should complete");

    assert_eq!(report.successful_routes(), 2);
    assert_eq!(report.successful_apis(), 1);
    assert_eq!(report.api_success_rate(), 50.0);
    assert!(!report.all_passed());

    let customers = &report.route_results()[1];
    let failed: Vec<_> = customers.failed_apis().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].api, "/api/v1/masters/prefectures");
    assert_eq!(failed[0].result.status_code, Some(404));
}

#[test]
fn test_run_command_writes_report() {
    let dir = TempDir::new().expect("temp dir");
    let backend = healthy_backend();
    let frontend = StubServer::new()
        .get("/", 200, PAGE)
        .get("/login", 200, PAGE)
        .get("/customers", 500, "Internal Server Error")
        .spawn();
    let config = config_for(&backend.url, &frontend.url, dir.path());
    let report_path = dir.path().join("out").join("report.json");

    let verdict = run::execute(&config, &report_path).expect("command should run");

    assert_eq!(verdict, Verdict::ChecksFailed);
    let content = std::fs::read_to_string(&report_path).expect("report should exist");
    let report: Value = serde_json::from_str(&content).expect("report is JSON");
    assert_eq!(report["total_routes"], 2);
    assert_eq!(report["successful_routes"], 1);
    assert_eq!(report["page_success_rate"], 50.0);
    assert_eq!(report["url_api_mapping"][1]["route"], "/customers");
    assert_eq!(report["route_results"][1]["page"]["status_code"], 500);
}

#[test]
fn test_aborted_run_writes_no_report() {
    let dir = TempDir::new().expect("temp dir");
    let backend = StubServer::new().spawn();
    let frontend = healthy_frontend();
    let config = config_for(&backend.url, &frontend.url, dir.path());
    let report_path = dir.path().join("report.json");

    let verdict = run::execute(&config, &report_path).expect("command should run");

    assert_eq!(verdict, Verdict::Aborted);
    assert!(!report_path.exists());
}
