//! The verification engine: authenticate, probe every route and its APIs,
//! scan page content, aggregate.

use chrono::Local;
use tracing::{debug, info};

use super::error::FatalPrecondition;
use super::outcome::{ApiOutcome, RouteOutcome};
use super::state::{RunMode, RunState};
use crate::auth::{authenticate, Credential, Credentials};
use crate::detect::{ErrorFinding, ErrorMatcher};
use crate::probe::{join_url, probe, HttpTransport, ProbeRequest, ProbeResult, SuccessPolicy};
use crate::registry::{RouteRegistry, RouteSpec};
use crate::report::RunReport;

/// Where and as whom a run probes
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub backend_url: String,
    pub frontend_url: String,
    pub credentials: Credentials,
    pub mode: RunMode,
}

/// Receives progress while a run executes.
///
/// All methods default to doing nothing.
pub trait RunObserver {
    fn authenticated(&mut self) {}
    fn frontend_reachable(&mut self, _root: &ProbeResult) {}
    fn route_started(&mut self, _spec: &RouteSpec) {}
    fn page_checked(&mut self, _route: &str, _page: &ProbeResult, _findings: &[ErrorFinding]) {}
    fn api_checked(&mut self, _api: &str, _result: &ProbeResult) {}
    fn route_finished(&mut self, _outcome: &RouteOutcome) {}
    fn aborted(&mut self, _reason: &FatalPrecondition) {}
    fn reported(&mut self, _report: &RunReport) {}
}

/// Observer that ignores every event
#[derive(Debug, Default)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Drives one run from login to report.
///
/// Execution is sequential: one request in flight at a time. Each route
/// produces its own [`RouteOutcome`] and the outcomes are merged only in
/// the aggregation step.
pub struct VerificationEngine<T: HttpTransport> {
    transport: T,
    registry: RouteRegistry,
    matcher: ErrorMatcher,
    settings: EngineSettings,
    state: RunState,
}

impl<T: HttpTransport> VerificationEngine<T> {
    pub fn new(
        transport: T,
        registry: RouteRegistry,
        matcher: ErrorMatcher,
        settings: EngineSettings,
    ) -> Self {
        Self {
            transport,
            registry,
            matcher,
            settings,
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute the run.
    ///
    /// Only a failed login or an unreachable frontend root returns `Err`;
    /// failing routes and APIs are recorded in the report instead.
    pub fn run(&mut self, observer: &mut dyn RunObserver) -> Result<RunReport, FatalPrecondition> {
        let credential = match self.settings.mode {
            RunMode::Integration => {
                self.advance(RunState::Authenticating);
                match authenticate(
                    &self.transport,
                    &self.settings.backend_url,
                    &self.settings.credentials,
                ) {
                    Ok(credential) => {
                        observer.authenticated();
                        Some(credential)
                    }
                    Err(err) => {
                        self.advance(RunState::AuthFailed);
                        let fatal = FatalPrecondition::from(err);
                        info!(error = %fatal, "aborting run");
                        observer.aborted(&fatal);
                        return Err(fatal);
                    }
                }
            }
            RunMode::PagesOnly => None,
        };

        self.advance(RunState::CheckingFrontend);
        let root_url = join_url(&self.settings.frontend_url, "/");
        let root = probe(
            &self.transport,
            &ProbeRequest::get(&root_url, SuccessPolicy::Page),
        );
        if !root.success {
            self.advance(RunState::FrontendUnreachable);
            let fatal = FatalPrecondition::FrontendUnreachable {
                url: root_url,
                reason: root
                    .error_message
                    .clone()
                    .unwrap_or_else(|| format!("HTTP {}", root.status_label())),
            };
            info!(error = %fatal, "aborting run");
            observer.aborted(&fatal);
            return Err(fatal);
        }
        observer.frontend_reachable(&root);

        self.advance(RunState::Probing);
        let outcomes: Vec<RouteOutcome> = self
            .registry
            .routes()
            .iter()
            .map(|spec| self.check_route(spec, credential.as_ref(), observer))
            .collect();

        self.advance(RunState::Aggregating);
        let report = RunReport::from_outcomes(
            Local::now(),
            self.settings.mode,
            self.registry.routes(),
            outcomes,
        );
        info!(
            routes = report.total_routes(),
            successful_routes = report.successful_routes(),
            apis = report.total_apis(),
            successful_apis = report.successful_apis(),
            findings = report.total_findings(),
            "run aggregated"
        );

        self.advance(RunState::Reported);
        observer.reported(&report);
        Ok(report)
    }

    fn check_route(
        &self,
        spec: &RouteSpec,
        credential: Option<&Credential>,
        observer: &mut dyn RunObserver,
    ) -> RouteOutcome {
        observer.route_started(spec);

        let page_url = join_url(&self.settings.frontend_url, &spec.route);
        let page = probe(
            &self.transport,
            &ProbeRequest::get(page_url, SuccessPolicy::Page),
        );
        // A failed page is already counted as failed; its body is not scanned.
        let findings = if page.success {
            self.matcher.find_errors(&page.body, &spec.route)
        } else {
            Vec::new()
        };
        observer.page_checked(&spec.route, &page, &findings);

        let apis = match credential {
            Some(credential) => spec
                .apis
                .iter()
                .map(|api| {
                    let request =
                        ProbeRequest::get(join_url(&self.settings.backend_url, api), SuccessPolicy::Api)
                            .with_bearer(credential.token());
                    let result = probe(&self.transport, &request);
                    observer.api_checked(api, &result);
                    ApiOutcome {
                        api: api.clone(),
                        result,
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        let outcome = RouteOutcome {
            route: spec.route.clone(),
            page,
            findings,
            apis,
        };
        debug!(
            route = %outcome.route,
            page_ok = outcome.page_passed(),
            findings = outcome.findings.len(),
            apis_ok = outcome.apis_passed(),
            apis = outcome.apis.len(),
            "route checked"
        );
        observer.route_finished(&outcome);
        outcome
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid run transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "run state");
        self.state = next;
    }
}
