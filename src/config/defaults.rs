//! Default values for a local development stack

use super::EndpointCheck;
use crate::probe::Method;

pub const DEFAULT_CONFIG_FILE: &str = "shuttle.toml";

pub(super) const BACKEND_URL: &str = "http://localhost:8080";
pub(super) const FRONTEND_URL: &str = "http://localhost:3002";

pub(super) const RUN_REPORT_FILE: &str = "frontend_api_integration_test.json";
pub(super) const SCAN_REPORT_FILE: &str = "frontend_js_errors.json";
pub(super) const CHECKS_REPORT_FILE: &str = "auxiliary_checks.json";

pub(super) const TYPECHECK_TIMEOUT_SECS: u64 = 30;
pub(super) const BUILD_TIMEOUT_SECS: u64 = 120;

pub(super) fn typecheck_command() -> Vec<String> {
    ["npx", "tsc", "--noEmit"].map(String::from).to_vec()
}

pub(super) fn build_command() -> Vec<String> {
    ["pnpm", "run", "build"].map(String::from).to_vec()
}

pub(super) fn endpoints() -> Vec<EndpointCheck> {
    [
        ("/api/v1/master/sales-statuses/", "Sales statuses"),
        ("/api/v1/auth/users/", "Users"),
        ("/api/v1/master/prefectures/", "Prefectures"),
    ]
    .into_iter()
    .map(|(path, label)| EndpointCheck {
        method: Method::Get,
        path: path.to_string(),
        label: label.to_string(),
    })
    .collect()
}
