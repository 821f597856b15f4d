//! Findings produced by the error matcher

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class of a detected client-side failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    /// A known script error signature matched
    ScriptError,
    /// React hydration failure text is present
    HydrationError,
    /// An explicit `console.error(...)` call appears in the content
    LoggedError,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::ScriptError => write!(f, "Script Error"),
            FindingKind::HydrationError => write!(f, "Hydration Error"),
            FindingKind::LoggedError => write!(f, "Console Error Call"),
        }
    }
}

/// One error signature found in a route's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorFinding {
    pub kind: FindingKind,
    /// Signature description, or the call text for logged errors
    pub pattern: String,
    /// The matched substring
    #[serde(rename = "match")]
    pub matched: String,
    /// Route whose content produced the finding
    pub route: String,
}

impl ErrorFinding {
    pub fn new(
        kind: FindingKind,
        pattern: impl Into<String>,
        matched: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            matched: matched.into(),
            route: route.into(),
        }
    }
}
