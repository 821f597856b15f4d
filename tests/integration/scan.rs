//! Pages-only scans over HTTP

use serde_json::Value;
use tempfile::TempDir;

use shuttle::commands::{scan, Verdict};

use super::helpers::*;

#[test]
fn test_scan_reports_findings_without_login() {
    let dir = TempDir::new().expect("temp dir");
    let backend = StubServer::new().with_login().spawn();
    let frontend = StubServer::new()
        .get("/", 200, "<html></html>")
        .get("/login", 200, "<html></html>")
        .get(
            "/customers",
            200,
            "<script>console.error(\"boom\")</script><p>Hydration failed because the server HTML differed</p>",
        )
        .spawn();
    let config = config_for(&backend.url, &frontend.url, dir.path());
    let report_path = dir.path().join("scan.json");

    let verdict = scan::execute(&config, &report_path).expect("command should run");

    assert_eq!(verdict, Verdict::ChecksFailed);
    assert!(backend.requests().is_empty());

    let content = std::fs::read_to_string(&report_path).expect("report should exist");
    let report: Value = serde_json::from_str(&content).expect("report is JSON");
    assert_eq!(report["mode"], "pages_only");
    assert_eq!(report["total_apis"], 0);
    assert_eq!(report["routes_with_findings"], 1);
    assert_eq!(report["total_findings"], 2);
    assert_eq!(report["error_free_rate"], 50.0);

    let kinds: Vec<&str> = report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .filter_map(|f| f["kind"].as_str())
        .collect();
    assert_eq!(kinds.len(), 2);
    assert!(report["findings"]
        .as_array()
        .expect("findings array")
        .iter()
        .all(|f| f["route"] == "/customers"));
}

#[test]
fn test_clean_scan_passes() {
    let dir = TempDir::new().expect("temp dir");
    let frontend = StubServer::new()
        .get("/", 200, "<html></html>")
        .get("/login", 200, "<html></html>")
        .get("/customers", 200, "<html></html>")
        .spawn();
    let config = config_for(&closed_port_url(), &frontend.url, dir.path());
    let report_path = dir.path().join("scan.json");

    let verdict = scan::execute(&config, &report_path).expect("command should run");

    assert_eq!(verdict, Verdict::Passed);
    assert!(report_path.exists());
}
