//! Run lifecycle states and allowed transitions

use serde::Serialize;
use std::fmt;

/// What a run probes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Authenticate, then probe every route and each of its expected APIs
    #[default]
    Integration,
    /// Probe and scan route pages only; no login, no API calls
    PagesOnly,
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Authenticating,
    /// Terminal: login failed, nothing else was probed
    AuthFailed,
    CheckingFrontend,
    /// Terminal: the frontend root did not answer 200
    FrontendUnreachable,
    Probing,
    Aggregating,
    /// Terminal: a report was produced
    Reported,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::AuthFailed | RunState::FrontendUnreachable | RunState::Reported
        )
    }

    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (NotStarted, Authenticating)
                | (NotStarted, CheckingFrontend)
                | (Authenticating, AuthFailed)
                | (Authenticating, CheckingFrontend)
                | (CheckingFrontend, FrontendUnreachable)
                | (CheckingFrontend, Probing)
                | (Probing, Aggregating)
                | (Aggregating, Reported)
        )
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::NotStarted => "not-started",
            RunState::Authenticating => "authenticating",
            RunState::AuthFailed => "auth-failed",
            RunState::CheckingFrontend => "checking-frontend",
            RunState::FrontendUnreachable => "frontend-unreachable",
            RunState::Probing => "probing",
            RunState::Aggregating => "aggregating",
            RunState::Reported => "reported",
        };
        f.write_str(name)
    }
}
